// Presentation collaborators: navigation anchors, ambient backgrounds and the
// site manifest that ties them to the current theme.

pub mod ambient;
pub mod handlers;
pub mod navigation;
