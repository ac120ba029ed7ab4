//! Seed content of the portfolio. Edited by hand and shipped with the binary.

use chrono::NaiveDate;

use super::models::{
    Certificate, OwnerProfile, Project, ProjectCategory, SocialLink, WorkExperience,
};
use super::CatalogError;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(id: &str, y: i32, m: u32, d: u32) -> Result<NaiveDate, CatalogError> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| CatalogError::InvalidDate {
        id: id.to_string(),
        date: format!("{y:04}-{m:02}-{d:02}"),
    })
}

pub fn owner() -> OwnerProfile {
    OwnerProfile {
        name: "Alan Syahlan Santriago".to_string(),
        role: "Full-Stack Developer".to_string(),
        email: "alansyahlansantriago99@gmail.com".to_string(),
        phone: "+62 812-7395-2018".to_string(),
        location: "Bengkulu, Indonesia".to_string(),
        cv_path: "/cv/alan-cv.pdf".to_string(),
        socials: vec![
            SocialLink {
                name: "GitHub".to_string(),
                url: "https://github.com/alansantriago".to_string(),
            },
            SocialLink {
                name: "LinkedIn".to_string(),
                url: "https://linkedin.com/in/alan-syahlan-santriago".to_string(),
            },
            SocialLink {
                name: "Instagram".to_string(),
                url: "https://instagram.com/alansantriago".to_string(),
            },
        ],
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "project-management-dashboard".to_string(),
            featured: true,
            title: "Kanban Project Management Dashboard".to_string(),
            description: "A comprehensive project management solution with drag-and-drop tasks, \
                          real-time updates, and team collaboration features."
                .to_string(),
            long_description: "This full-stack application was built to streamline team \
                               workflows. It features a drag-and-drop interface powered by React \
                               Beautiful DnD, real-time database synchronization with Firebase, \
                               and a secure RESTful API built with Node.js and Express for data \
                               handling."
                .to_string(),
            thumbnail: "/projects/kanban-thumb.jpg".to_string(),
            images: strings(&[
                "/projects/kanban-1.jpg",
                "/projects/kanban-2.jpg",
                "/projects/kanban-3.jpg",
            ]),
            tags: strings(&["React", "Node.js", "Firebase", "Tailwind CSS", "Express"]),
            category: ProjectCategory::WebApp,
            year: 2023,
            live_url: Some("#".to_string()),
            repo_url: Some("#".to_string()),
        },
        Project {
            id: "ecommerce-mobile-app".to_string(),
            featured: false,
            title: "E-commerce Mobile App".to_string(),
            description: "Modern e-commerce mobile application with a stunning UI, seamless UX, \
                          and integration with a payment gateway."
                .to_string(),
            long_description: "A fully functional mobile shopping app for both iOS and Android. \
                               It includes features like product search and filtering, a shopping \
                               cart, user authentication, and a checkout process powered by a mock \
                               payment gateway."
                .to_string(),
            thumbnail: "/projects/ecommerce-thumb.jpg".to_string(),
            images: strings(&["/projects/ecommerce-1.jpg", "/projects/ecommerce-2.jpg"]),
            tags: strings(&["React Native", "Firebase", "Stripe API"]),
            category: ProjectCategory::MobileApp,
            year: 2023,
            live_url: Some("#".to_string()),
            repo_url: Some("#".to_string()),
        },
        Project {
            id: "3d-portfolio-gallery".to_string(),
            featured: false,
            title: "3D Portfolio Gallery".to_string(),
            description: "An interactive and immersive 3D gallery to showcase creative works, \
                          built with Three.js and WebGL."
                .to_string(),
            long_description: "This project explores the possibilities of WebGL to create an \
                               engaging user experience. It uses react-three-fiber to manage the \
                               3D scene, with custom shaders for effects and interactive camera \
                               controls."
                .to_string(),
            thumbnail: "/projects/3d-gallery-thumb.jpg".to_string(),
            images: strings(&["/projects/3d-gallery-1.jpg", "/projects/3d-gallery-2.jpg"]),
            tags: strings(&["Three.js", "WebGL", "React", "Shaders"]),
            category: ProjectCategory::Graphics3d,
            year: 2022,
            live_url: None,
            repo_url: None,
        },
    ]
}

pub fn certificates() -> Result<Vec<Certificate>, CatalogError> {
    Ok(vec![
        Certificate {
            id: "web-development".to_string(),
            title: "The Complete 2023 Web Development Bootcamp".to_string(),
            issuer: "Udemy".to_string(),
            issuer_logo: "/logos/udemy.svg".to_string(),
            issue_date: date("web-development", 2023, 1, 20)?,
            thumbnail: "/certificates/web-thumb.jpg".to_string(),
            full_image: "/certificates/web-full.jpg".to_string(),
            tags: strings(&["Development", "Full-Stack", "MERN"]),
            credential_url: Some("https://www.udemy.com/certificate/UC-xxxx-xxxx/".to_string()),
        },
        Certificate {
            id: "ui-ux-design".to_string(),
            title: "Google UX Design Professional Certificate".to_string(),
            issuer: "Coursera".to_string(),
            issuer_logo: "/logos/coursera.svg".to_string(),
            issue_date: date("ui-ux-design", 2023, 3, 15)?,
            thumbnail: "/certificates/ux-thumb.jpg".to_string(),
            full_image: "/certificates/ux-full.jpg".to_string(),
            tags: strings(&["Design", "UI/UX", "Figma"]),
            credential_url: Some(
                "https://www.coursera.org/account/accomplishments/professional-cert/xxxx"
                    .to_string(),
            ),
        },
        Certificate {
            id: "react-advanced".to_string(),
            title: "Advanced React & Redux".to_string(),
            issuer: "Udemy".to_string(),
            issuer_logo: "/logos/udemy.svg".to_string(),
            issue_date: date("react-advanced", 2023, 5, 10)?,
            thumbnail: "/certificates/react-thumb.jpg".to_string(),
            full_image: "/certificates/react-full.jpg".to_string(),
            tags: strings(&["Development", "Front-End", "React"]),
            credential_url: Some("https://www.udemy.com/certificate/UC-yyyy-yyyy/".to_string()),
        },
        Certificate {
            id: "aws-cloud".to_string(),
            title: "AWS Certified Cloud Practitioner".to_string(),
            issuer: "Amazon Web Services".to_string(),
            issuer_logo: "/logos/aws.svg".to_string(),
            issue_date: date("aws-cloud", 2023, 7, 22)?,
            thumbnail: "/certificates/aws-thumb.jpg".to_string(),
            full_image: "/certificates/aws-full.jpg".to_string(),
            tags: strings(&["Cloud", "AWS", "Infrastructure"]),
            credential_url: Some("https://www.credly.com/badges/zzzz".to_string()),
        },
    ])
}

#[allow(clippy::too_many_arguments)]
fn experience(
    id: &str,
    company: &str,
    position: &str,
    duration: &str,
    location: &str,
    description: &[&str],
    logo: &str,
    skills: &[&str],
) -> WorkExperience {
    WorkExperience {
        id: id.to_string(),
        company: company.to_string(),
        position: position.to_string(),
        duration: duration.to_string(),
        location: location.to_string(),
        description: strings(description),
        logo: logo.to_string(),
        skills: strings(skills),
    }
}

pub fn experiences() -> Vec<WorkExperience> {
    vec![
        experience(
            "diskominfo",
            "Dinas Komunikasi dan Informatika",
            "Frontend Developer",
            "Jan 2025 - Present",
            "Bengkulu, Indonesia",
            &[
                "Developed responsive and visually appealing user interfaces using React and Next.js",
                "Integrated REST APIs to ensure dynamic data rendering and seamless interaction",
                "Collaborated with UI/UX designers to enhance user experience across platforms",
                "Optimized performance and conducted thorough testing to ensure application stability",
            ],
            "/logo-kominfo.png",
            &["React", "Next.js", "Laravel", "Tailwind CSS", "MySQL"],
        ),
        experience(
            "alfaefsatech",
            "AlfaefsaTech",
            "Programmer",
            "May 2025 - Present",
            "Indonesia (Remote)",
            &[
                "Designed and developed custom websites for clients using Laravel and Tailwind CSS",
                "Provided end-to-end web solutions from UI/UX design to deployment",
                "Maintained scalable and well-documented codebases for ongoing client projects",
            ],
            "/logo-alfaefsatech.png",
            &["Laravel", "PHP", "MySQL", "Tailwind CSS", "Web Design"],
        ),
        experience(
            "bpptik-kominfo",
            "BPPTIK Kominfo",
            "Junior Web Developer",
            "Sep 2024",
            "Cikarang, Indonesia",
            &[
                "Implemented interactive user interfaces using HTML, CSS, JavaScript, and PHP",
                "Organized source files for maintainability and followed structured programming principles",
                "Utilized pre-built libraries and frameworks such as Bootstrap to enhance development speed",
            ],
            "/logo-kominfo.png",
            &["HTML5", "CSS3", "JavaScript", "PHP", "Bootstrap", "MySQL"],
        ),
        experience(
            "btn",
            "PT. Bank Tabungan Negara (BTN)",
            "Business Support Intern",
            "Apr 2024 - Jun 2024",
            "Bengkulu, Indonesia",
            &[
                "Assisted customers with QRIS and EDC setup for their businesses",
                "Managed payroll and deposit client data, created memos and reports",
                "Conducted canvassing activities to attract new business clients",
            ],
            "/logo-BTN.png",
            &["Customer Service", "Data Management", "Banking Services"],
        ),
        experience(
            "unib-animation",
            "Universitas Bengkulu",
            "Computer Lab Assistant - 2D/3D Animation",
            "Jan 2023 - Jun 2023",
            "Bengkulu, Indonesia",
            &[
                "Assisted in teaching 2D/3D animation using Adobe Animate, Blender, and After Effects",
                "Guided students in creative and technical animation techniques",
                "Improved communication skills through academic support and mentoring",
            ],
            "/logo-unib.png",
            &["Adobe Animate", "Blender", "After Effects", "Adobe Illustrator"],
        ),
        experience(
            "smait-iqra",
            "SMAIT IQRA Kota Bengkulu",
            "Web Developer Intern",
            "Feb 2022 - Jun 2022",
            "Bengkulu, Indonesia",
            &[
                "Developed a mail service and archiving web system using CodeIgniter",
                "Handled full project lifecycle from analysis to user training and maintenance",
            ],
            "/logo-SMAIT-Iqra.png",
            &["PHP", "CodeIgniter", "JavaScript", "HTML5", "CSS3"],
        ),
        experience(
            "unib-engineering",
            "Universitas Bengkulu",
            "Web Developer Intern",
            "Sep 2021 - Dec 2021",
            "Bengkulu, Indonesia",
            &[
                "Developed a Daily Performance Journal system for the Faculty of Engineering",
                "Handled design, development, implementation, and user support",
            ],
            "/logo-unib.png",
            &["PHP", "CodeIgniter", "HTML5", "CSS3"],
        ),
        experience(
            "utdi",
            "Universitas Teknologi Digital Indonesia (UTDI)",
            "IT Intern",
            "May 2017 - Aug 2017",
            "Yogyakarta, Indonesia",
            &[
                "Worked on Arduino-based hardware projects and explored Adobe tools for multimedia",
                "Produced advertising media and gained exposure to robotics and video production",
            ],
            "/logo-akakom.png",
            &[
                "Arduino",
                "Adobe Premiere Pro",
                "Adobe Illustrator",
                "Photoshop",
                "After Effects",
            ],
        ),
    ]
}
