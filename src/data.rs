//! Static Site Content
//!
//! Everything the panels render. Pure data, no behaviour.

use crate::models::{
    ContactEntry, Experience, Link, Project, Skill, SkillFilter, SkillGroup, SkillSummary, TimelineEntry,
};

pub const OWNER_NAME: &str = "Devansh Sharma";
pub const TAGLINE: &str = "Aspiring Software Engineer | MERN Stack | DSA Mentor";
pub const CONTACT_EMAIL: &str = "debu1301@gmail.com";
pub const PROFILE_IMAGE: &str = "/assets/profile.jpg";
pub const RESUME_PATH: &str = "/assets/Devansh_Sharma_Resume.pdf";
pub const GITHUB_PROFILE: &str = "https://github.com/GOKU1301";

pub const EMAIL_LINK: Link = Link { label: "Email", href: "mailto:debu1301@gmail.com" };
pub const LINKEDIN_LINK: Link = Link {
    label: "LinkedIn",
    href: "https://www.linkedin.com/in/sharmadevansh1301/",
};
pub const GITHUB_LINK: Link = Link { label: "GitHub", href: GITHUB_PROFILE };

pub const ABOUT_SUMMARY: &str = "I'm Devansh Sharma, a Computer Science student at Jaypee Institute of Information Technology (GPA: 7.6/10, expected May 2026). Passionate about web development, DSA, and mentoring, I have experience as a Senior Mentor at SaarthiPath and as a Web Development Intern at Accretive Technologies. I love building impactful products, competitive programming, and have solved 1000+ DSA problems across major platforms.";

pub const BIO: &[&str] = &[
    "I'm Devansh Sharma, a Computer Science student at Jaypee Institute of Information Technology with a passion for web development and mentoring. I specialize in the MERN stack and enjoy building applications that solve real-world problems.",
    "Currently, I'm working as a Senior Mentor at SaarthiPath, where I guide students in Data Structures and Algorithms. I've also interned at Accretive Technologies as a Web Development Intern, where I contributed to building robust web applications.",
    "When I'm not coding, I enjoy solving complex algorithmic problems, participating in hackathons, and exploring new technologies to expand my skill set.",
];

pub const SKILL_SUMMARIES: &[SkillSummary] = &[
    SkillSummary {
        heading: "Frontend",
        items: &["React.js", "Next.js", "HTML5", "CSS3", "JavaScript", "TypeScript", "Tailwind CSS"],
    },
    SkillSummary {
        heading: "Backend",
        items: &["Node.js", "Express.js", "MongoDB", "MySQL", "Firebase", "REST APIs"],
    },
    SkillSummary {
        heading: "Tools & Others",
        items: &["Git", "GitHub", "VS Code", "AWS S3", "Vercel", "Railway"],
    },
];

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        years: "2023 - Present",
        title: "Senior Mentor",
        organization: "SaarthiPath",
        description: "Guiding students in Data Structures and Algorithms, conducting mock interviews, and providing career guidance.",
    },
    TimelineEntry {
        years: "2022 - 2023",
        title: "Web Development Intern",
        organization: "Accretive Technologies",
        description: "Developed full-stack web applications using React.js, Node.js, and MongoDB. Implemented responsive designs and RESTful APIs.",
    },
    TimelineEntry {
        years: "2021 - 2025",
        title: "B.Tech in Computer Science",
        organization: "Jaypee Institute of Information Technology",
        description: "Focusing on web development, data structures, algorithms, and software engineering principles.",
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        role: "Senior Mentor",
        company: "SaarthiPath",
        company_url: "https://saarthipath.com",
        period: "May 2025 – Present",
        location: "Noida, India",
        employment: "Part-time",
        logo: Some("/assets/saarthipath-logo.png"),
        certificate_url: Some("https://drive.google.com/file/d/1wa3gZ-ea1Atx7wuzvLbsJT4xP1a1WAgn/view?usp=sharing"),
        responsibilities: &[
            "Mentored 50+ students in foundational programming and DSA through structured sessions.",
            "Designed tailored DSA roadmaps for beginner to intermediate learners.",
            "Provided 1-on-1 doubt-solving sessions over video calls for DSA and MERN stack queries.",
        ],
        skills: &["DSA", "Programming", "Mentoring", "MERN Stack"],
    },
    Experience {
        role: "Web Development Intern",
        company: "Accretive Technologies",
        company_url: "https://accretivetech.com",
        period: "Oct 2024 – Dec 2024",
        location: "Remote",
        employment: "Internship",
        logo: Some("/assets/accretive-logo.png"),
        certificate_url: Some("https://drive.google.com/file/d/1iwxlmjkHzXEbhZBCqCgTcUS6s2WaoIa1/view?usp=sharing"),
        responsibilities: &[
            "Contributed to building 2 RESTful APIs for internal service modules.",
            "Worked on backend logic for basic CRUD operations on a MongoDB database with 500 records.",
            "Wrote and reviewed 300+ lines of Node.js/Express code in a collaborative Git workflow.",
        ],
        skills: &["Node.js", "Express.js", "MongoDB", "REST APIs"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "jitNutrition",
        description: "Nutrition tracking app for JIIT students. Integrated Nutritionix API, Gemini API for fallback, Pincone vector search, @xenova/transformers for food mapping, OCR for meal data, deployed via Vercel and Railway, MongoDB Atlas for scalable storage.",
        image: "/assets/jitnutrition.jpg",
        tags: &["React.js", "Node.js", "Express.js", "MongoDB Atlas", "Pinecone", "@xenova/transformers", "Gemini API", "Vercel", "Railway"],
        live_url: "https://yourfitnesspal.vercel.app",
        source_url: "https://github.com/GOKU1301/yourfitnesspal",
        features: &[
            "Accurate food nutrient data using Nutritionix API with Gemini API fallback",
            "Vector search for 50+ local food names",
            "OCR to extract meal data from 90+ JIIT mess timetables",
            "Real-time storage and analytics using MongoDB Atlas and Railway",
        ],
    },
    Project {
        id: 2,
        title: "jiitSimplified",
        description: "Full-stack portal using Next.js, TypeScript, AWS S3, OAuth 2.0. REST APIs with Express.js, MySQL (Sequelize), AWS S3/Multer for uploads, Passport.js for sessions. Managed 500+ PYQs, 100+ PDF/Doc files, 30+ sessions.",
        image: "/assets/jiitsimplified.jpg",
        tags: &["Next.js", "Node.js", "Express.js", "MySQL", "TypeScript", "AWS S3", "OAuth 2.0"],
        live_url: "https://jiitsimplified.web.app",
        source_url: "https://github.com/GOKU1301/jiitSimplified",
        features: &[
            "Upload and retrieve JIIT PYQs using Next.js and TypeScript",
            "REST APIs with Express.js and MySQL (Sequelize) for 500+ PYQs",
            "AWS S3 and Multer for upload/access of 100+ PDF/Doc files",
            "OAuth 2.0 with Passport.js, 30+ sessions",
        ],
    },
    Project {
        id: 3,
        title: "EduChat",
        description: "Real-time chat app using Express.js, Socket.IO, Firebase (Firestore & Auth), Render. Supported 10+ active chat rooms, 1,000+ messages, deployed on Render.",
        image: "/assets/educhat.jpg",
        tags: &["Node.js", "Express.js", "Socket.IO", "Firebase", "Render"],
        live_url: "https://v0-dp-ortal.vercel.app",
        source_url: "https://github.com/GOKU1301/dportal",
        features: &[
            "Implemented real-time chat using Express.js and Socket.IO",
            "Supported 10+ active chat rooms and 1,000+ messages",
            "Used Firebase Firestore & Auth for user access and storage",
            "Deployed on Render for seamless cross-user communication",
        ],
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: SkillFilter::Languages,
        title: "Languages",
        skills: &[
            Skill { name: "C/C++", level: 95 },
            Skill { name: "JavaScript", level: 90 },
            Skill { name: "Python (Basic)", level: 60 },
            Skill { name: "Java (Basic)", level: 60 },
        ],
    },
    SkillGroup {
        category: SkillFilter::Frontend,
        title: "Frontend",
        skills: &[
            Skill { name: "React.js", level: 85 },
        ],
    },
    SkillGroup {
        category: SkillFilter::Backend,
        title: "Backend",
        skills: &[
            Skill { name: "Node.js", level: 90 },
            Skill { name: "Express.js", level: 85 },
            Skill { name: "MySQL", level: 75 },
            Skill { name: "PostgreSQL", level: 65 },
            Skill { name: "MongoDB", level: 80 },
        ],
    },
    SkillGroup {
        category: SkillFilter::Tools,
        title: "Tools & Others",
        skills: &[
            Skill { name: "Git", level: 90 },
            Skill { name: "GitHub", level: 90 },
            Skill { name: "VS Code", level: 95 },
        ],
    },
];

pub const CONTACT_INFO: &[ContactEntry] = &[
    ContactEntry { label: "Email", value: "debu1301@gmail.com", href: Some("mailto:debu1301@gmail.com") },
    ContactEntry {
        label: "LinkedIn",
        value: "linkedin.com/in/sharmadevansh1301",
        href: Some("https://www.linkedin.com/in/sharmadevansh1301/"),
    },
    ContactEntry { label: "GitHub", value: "github.com/GOKU1301", href: Some(GITHUB_PROFILE) },
    ContactEntry { label: "Location", value: "Noida, India", href: None },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::filter_skill_groups;

    #[test]
    fn test_every_filter_tab_has_content() {
        for filter in SkillFilter::ALL {
            assert!(
                !filter_skill_groups(SKILL_GROUPS, filter).is_empty(),
                "no groups for {:?}",
                filter
            );
        }
    }

    #[test]
    fn test_skill_levels_in_range() {
        for group in SKILL_GROUPS {
            for skill in group.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }
}
