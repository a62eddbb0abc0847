//! Static portfolio content
//!
//! Everything the sections display lives here. The data is compiled in and
//! treated as already valid; edit this file to update the site.

/// Who the portfolio belongs to
#[derive(Debug, Clone, Copy)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub role: &'static str,
    pub title: &'static str,
    pub experience: &'static str,
    pub hero_text: &'static str,
    pub about_text: &'static str,
    pub career_goal: &'static str,
}

/// A single skill with a proficiency level from 0 to 100
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

/// A titled group of skills
#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub name: &'static str,
    pub tagline: &'static str,
    pub short_description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub key_features: &'static [&'static str],
    pub github: &'static str,
    pub demo: &'static str,
    pub screenshots: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub current: bool,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub year: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

impl SocialLink {
    /// URL without its scheme, the way the contact section lists it
    pub fn display_url(&self) -> &'static str {
        ["https://", "http://", "mailto:"]
            .iter()
            .find_map(|prefix| self.url.strip_prefix(prefix))
            .unwrap_or(self.url)
    }
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Dhruv Kumar",
    role: "Software Engineer at Euphoric thought Technologies",
    title: "Full Stack Developer",
    experience: "1 year",
    hero_text: "Building the future, one line of code at a time.",
    about_text: "I build modern, maintainable web applications using React on the frontend and \
                 Spring Boot on the backend. I enjoy solving problems end-to-end, from designing \
                 APIs and database schemas to building delightful user interfaces.",
    career_goal: "I aim to grow as a full-stack engineer, build cloud-native systems, and \
                  contribute to open-source and innovative digital products.",
};

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        skills: &[
            Skill { name: "HTML", level: 90 },
            Skill { name: "CSS", level: 85 },
            Skill { name: "JavaScript", level: 88 },
            Skill { name: "React", level: 85 },
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[
            Skill { name: "Java", level: 90 },
            Skill { name: "Spring Boot", level: 88 },
            Skill { name: "Play Framework", level: 82 },
            Skill { name: "Node.js", level: 80 },
        ],
    },
    SkillCategory {
        title: "Database",
        skills: &[
            Skill { name: "PostgreSQL", level: 85 },
            Skill { name: "MySQL", level: 82 },
            Skill { name: "MongoDB", level: 80 },
        ],
    },
    SkillCategory {
        title: "DevOps & Tools",
        skills: &[
            Skill { name: "Git", level: 88 },
            Skill { name: "Jenkins", level: 75 },
            Skill { name: "AWS", level: 78 },
            Skill { name: "Docker", level: 80 },
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        name: "Soultrps",
        tagline: "Digital Wellness Marketplace",
        short_description: "Soultrps is a digital wellness marketplace connecting corporate \
                            organizations with a wide range of wellness service providers. It \
                            enables companies to purchase and manage employee wellness programs, \
                            including health insurance, fitness plans, and mental wellness \
                            sessions, all in one platform.",
        tech_stack: &["React", "Spring Boot", "PostgreSQL"],
        key_features: &[
            "Enterprise SSO integration and secure authentication flows",
            "Scalable REST APIs with Spring Boot and PostgreSQL",
            "Admin and provider dashboards for program management",
            "Role-based access control and auditing",
        ],
        github: "http://github.com/dhruv-soultrps",
        demo: "http://example-soultrps.com",
        screenshots: &[
            "project-soultrps-1.jpg",
            "project-soultrps-2.jpg",
            "project-soultrps-3.jpg",
        ],
    },
    Project {
        id: 2,
        name: "Printing Pro",
        tagline: "Product Showcase & Ordering Platform",
        short_description: "Printing Pro is a product showcase and ordering information site \
                            where users can explore a wide range of printing products, calculate \
                            prices, contact the vendor for custom orders, and admins can perform \
                            CRUD operations on products.",
        tech_stack: &["React", "Spring Boot", "PostgreSQL"],
        key_features: &[
            "Product catalog with pricing calculator",
            "Contact/request form for leads",
            "Admin panel for product CRUD",
            "Responsive product cards and search/filter",
        ],
        github: "http://github.com/dhruv-printingpro",
        demo: "http://sjslfjl.com",
        screenshots: &[
            "project-printing-pro-1.jpg",
            "project-printing-pro-2.jpg",
            "project-printing-pro-3.jpg",
        ],
    },
];

pub const EXPERIENCE: &[Experience] = &[Experience {
    role: "Software Engineer (Full Stack Developer)",
    company: "Euphoric",
    duration: "1 year",
    current: true,
    achievements: &[
        "Developed scalable backend APIs using Spring Boot and PostgreSQL.",
        "Implemented user authentication and SSO integrations.",
        "Collaborated on frontend development using React and REST APIs.",
        "Participated in design discussions and code reviews.",
    ],
}];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "MCA",
        institution: "Uttarakhand Technical University",
        location: "Dehradun",
        year: "Recent",
    },
    Education {
        degree: "B.Sc. (Hons) Mathematics",
        institution: "Patliputra University",
        location: "Patna",
        year: "",
    },
    Education {
        degree: "12th",
        institution: "Sir G D Patliputra High School",
        location: "Patna",
        year: "",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/dhruv",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/dhruv",
    },
    SocialLink {
        name: "Email",
        url: "mailto:imdhruv@zohomail.in",
    },
    SocialLink {
        name: "LeetCode",
        url: "https://leetcode.com/dhruv",
    },
    SocialLink {
        name: "GeeksforGeeks",
        url: "https://auth.geeksforgeeks.org/user/dhruv",
    },
];
