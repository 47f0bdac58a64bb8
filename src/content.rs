//! Static site content: every record here is constructed once at compile
//! time and read-only thereafter. The view components only map these slices
//! to markup.

/// In-page anchor target.
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        name: "Home",
        href: "#home",
    },
    NavItem {
        name: "About",
        href: "#about",
    },
    NavItem {
        name: "Projects",
        href: "#projects",
    },
    NavItem {
        name: "Experience",
        href: "#experience",
    },
    NavItem {
        name: "Contact",
        href: "#contact",
    },
];

pub const SITE_NAME: &str = "Monika";
pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/18aZ1ddkuVBzxRv49GIyHSne5mYa5_8Dn/view?usp=sharing";
pub const RESUME_FILENAME: &str = "Monika_Muniraju.pdf";

/// Words cycled by the hero typewriter.
pub const HERO_SKILLS: &[&str] = &[
    "MERN Stack",
    "LLMs & OpenAI",
    "Generative AI",
    "Test Automation",
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat {
        label: "AI Projects",
        value: "8+",
    },
    Stat {
        label: "Full Stack Projects",
        value: "3+",
    },
    Stat {
        label: "Code Commits",
        value: "100+",
    },
    Stat {
        label: "Years Experience",
        value: "2+",
    },
];

/// One capability card in the About grid.
#[derive(Debug, Clone, Copy)]
pub struct SkillCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Tailwind gradient stops, e.g. "from-green-500 to-emerald-500".
    pub gradient: &'static str,
    pub technologies: &'static [&'static str],
}

pub const SKILL_CARDS: &[SkillCard] = &[
    SkillCard {
        icon: "bot",
        title: "AI-Powered Assistants",
        description: "GPT Chatbots, AI Tutors, Study Helpers",
        gradient: "from-green-500 to-emerald-500",
        technologies: &[
            "OpenAI GPT-4",
            "Gemini",
            "Custom Prompts",
            "Voice-to-Text",
            "Razorpay",
        ],
    },
    SkillCard {
        icon: "brain",
        title: "LLM Integrations",
        description: "OpenAI, Embeddings, Vector Search",
        gradient: "from-blue-500 to-cyan-500",
        technologies: &["OpenAI Embeddings", "Pinecone", "ChromaDB"],
    },
    SkillCard {
        icon: "code",
        title: "Full Stack Development",
        description: "MERN Stack, JWT Auth, API Integration",
        gradient: "from-purple-500 to-pink-500",
        technologies: &["React", "Node.js", "MongoDB", "Express", "JWT", "Axios"],
    },
    SkillCard {
        icon: "file-text",
        title: "Document Parsing & Processing",
        description: "AI-Powered File Analysis, Uploads & Optimizations",
        gradient: "from-sky-500 to-indigo-500",
        technologies: &[
            "pdf-parse",
            "docx-parser",
            "Multer (File Uploads)",
            "Tesseract.js (OCR)",
            "QnA with GPT",
            "Terser (JS Optimization)",
        ],
    },
    SkillCard {
        icon: "zap",
        title: "Test Automation",
        description: "UI & API Testing with Modern Tools",
        gradient: "from-yellow-500 to-orange-500",
        technologies: &["Cypress", "Playwright", "Postman"],
    },
    SkillCard {
        icon: "database",
        title: "Data & Storage",
        description: "NoSQL, Vector DBs, Secure Uploads",
        gradient: "from-indigo-500 to-purple-500",
        technologies: &["MongoDB", "Redis", "Amazon S3", "Vector DBs"],
    },
    SkillCard {
        icon: "cpu",
        title: "API & Integration",
        description: "RESTful APIs, Webhooks, Payment Gateway",
        gradient: "from-rose-500 to-pink-500",
        technologies: &["REST APIs", "Webhooks", "Razorpay", "JWT"],
    },
    SkillCard {
        icon: "cloud",
        title: "Deployments & Cloud",
        description: "Modern Hosting & CI/CD Pipelines",
        gradient: "from-teal-500 to-blue-500",
        technologies: &["Vercel", "Render", "AWS", "GitHub Actions"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct LabeledLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Where a project's source lives: one repository, or a labeled list
/// (split frontend/backend repos) revealed through a dropdown.
#[derive(Debug, Clone, Copy)]
pub enum CodeLink {
    Single(&'static str),
    Multiple(&'static [LabeledLink]),
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub live_demo: &'static str,
    pub code: CodeLink,
    /// Featured projects span a wider grid cell and carry a badge.
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "AI Assistant Platform",
        description: "24/7 AI helpdesk builder for businesses with custom knowledge base \
                      integration and multi-channel support.",
        image: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=600",
        tags: &["OpenAI", "RAG", "MERN", "Socket.io"],
        live_demo: "#",
        code: CodeLink::Multiple(&[
            LabeledLink {
                label: "Frontend",
                url: "#",
            },
            LabeledLink {
                label: "Backend",
                url: "#",
            },
        ]),
        featured: true,
    },
    Project {
        title: "RAG Document Analyzer",
        description: "Retrieval-Augmented Generation app that analyzes custom documents and \
                      provides intelligent responses.",
        image: "https://images.pexels.com/photos/5029857/pexels-photo-5029857.jpeg?auto=compress&cs=tinysrgb&w=600",
        tags: &["LangChain", "Vector DB", "React", "Python"],
        live_demo: "#",
        code: CodeLink::Single("#"),
        featured: true,
    },
    Project {
        title: "Voice-to-AI Assistant",
        description: "Real-time voice conversation with AI using Whisper for speech-to-text and \
                      GPT for responses.",
        image: "https://images.pexels.com/photos/7688336/pexels-photo-7688336.jpeg?auto=compress&cs=tinysrgb&w=600",
        tags: &["Whisper", "OpenAI", "WebRTC", "Node.js"],
        live_demo: "#",
        code: CodeLink::Single("#"),
        featured: false,
    },
    Project {
        title: "Smart Resume Analyzer",
        description: "AI-powered resume analyzer that matches candidates with job requirements \
                      and provides optimization suggestions.",
        image: "https://images.pexels.com/photos/590020/pexels-photo-590020.jpeg?auto=compress&cs=tinysrgb&w=600",
        tags: &["NLP", "React", "Express", "TensorFlow"],
        live_demo: "#",
        code: CodeLink::Single("#"),
        featured: false,
    },
    Project {
        title: "Personal Tutor AI",
        description: "Adaptive learning assistant with memory capabilities using LangChain and \
                      vector databases.",
        image: "https://images.pexels.com/photos/5428836/pexels-photo-5428836.jpeg?auto=compress&cs=tinysrgb&w=600",
        tags: &["LangChain", "Memory", "Next.js", "Pinecone"],
        live_demo: "#",
        code: CodeLink::Single("#"),
        featured: false,
    },
    Project {
        title: "Chrome Extension Chatbot",
        description: "Browser extension that provides AI assistance while browsing, with \
                      context-aware responses.",
        image: "https://images.pexels.com/photos/11035544/pexels-photo-11035544.jpeg?auto=compress&cs=tinysrgb&w=600",
        tags: &["Chrome API", "OpenAI", "JavaScript", "CSS"],
        live_demo: "#",
        code: CodeLink::Single("#"),
        featured: false,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub const EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "Associate Software Developer",
        company: "Valtech India Pvt Ltd",
        location: "Bangalore, India",
        period: "Sep 2023 – Present",
        description: "Working as a MERN Stack Developer contributing to full-stack development, \
                      frontend performance optimization, and automation testing.",
        achievements: &[
            "Engineered scalable, responsive web applications using React.js, improving frontend performance and user experience.",
            "Implemented JWT-based role authentication and dynamic dashboard flows tailored to user roles.",
            "Integrated secure payment gateway (Razorpay) and file management using Amazon S3.",
            "Collaborated with backend teams to integrate and test RESTful APIs using Axios and Postman.",
            "Reduced manual testing time by 40% by developing automation suites with Cypress and Playwright.",
            "Participated in Agile ceremonies and code reviews, ensuring timely delivery and clean, maintainable code.",
        ],
        technologies: &[
            "React.js",
            "Node.js",
            "MongoDB",
            "Express.js",
            "JWT",
            "Amazon S3",
            "Razorpay",
            "Axios",
            "Cypress",
            "Playwright",
            "Bootstrap",
            "Google Maps API",
        ],
    },
    ExperienceEntry {
        title: "AI Project Contributor",
        company: "Independent Projects",
        location: "Remote",
        period: "Present",
        description: "Designed and developed AI-powered web applications targeting education, \
                      e-commerce, and customer service domains using modern LLMs and full-stack \
                      frameworks.",
        achievements: &[
            "Developed an AI Study Assistant using OpenAI GPT-4 with file upload support, voice/text chat, personalized tutor behavior, JWT authentication, and Razorpay subscriptions",
            "Created a plug-and-play AI FAQ Chatbot that integrates into websites, trained on business-specific data using OpenAI embeddings and Pinecone",
            "Built a T&C Summarizer to extract and highlight legal clauses from uploaded documents or URLs",
            "Developed a Chrome extension for doubt-solving that accepts documents or images and responds with contextual answers via OpenAI GPT",
            "Designed a GPT-powered social media content generator that creates optimized posts based on product keywords",
        ],
        technologies: &[
            "MERN Stack",
            "OpenAI GPT-4",
            "Gemini",
            "Pinecone",
            "ChromaDB",
            "Tailwind CSS",
            "pdf-parse",
        ],
    },
    ExperienceEntry {
        title: "Web Development Intern",
        company: "Mphasis Limited",
        location: "Bangalore, India",
        period: "June 27, 2022 – December 30, 2022",
        description: "Assisted in the development of responsive web applications and gained \
                      hands-on experience with front-end technologies and RESTful APIs.",
        achievements: &[
            "Contributed to the development of UI components using HTML, CSS, and JavaScript",
            "Collaborated with senior developers to debug, test, and enhance features in client projects",
            "Learned version control practices using Git and participated in agile development cycles",
            "Created interactive web interfaces aligned with design and accessibility standards",
        ],
        technologies: &["HTML", "CSS", "JavaScript", "Bootstrap", "Git", "REST APIs"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    AiMl,
    Security,
    Payments,
    Cloud,
    Testing,
}

impl SkillCategory {
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::AiMl => "AI/ML",
            SkillCategory::Security => "Security",
            SkillCategory::Payments => "Payments",
            SkillCategory::Cloud => "Cloud",
            SkillCategory::Testing => "Testing",
        }
    }

    pub fn gradient(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "from-blue-500 to-cyan-500",
            SkillCategory::Backend => "from-green-500 to-emerald-500",
            SkillCategory::AiMl => "from-purple-500 to-pink-500",
            SkillCategory::Database => "from-orange-500 to-red-500",
            SkillCategory::Cloud => "from-yellow-500 to-orange-500",
            SkillCategory::Security => "from-red-500 to-pink-500",
            SkillCategory::Payments => "from-fuchsia-500 to-rose-500",
            SkillCategory::Testing => "from-indigo-500 to-violet-500",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TechProficiency {
    pub name: &'static str,
    pub category: SkillCategory,
    /// Drives the bar width, 0..=100.
    pub proficiency: u8,
}

pub const TECH_STACK: &[TechProficiency] = &[
    TechProficiency {
        name: "React.js",
        category: SkillCategory::Frontend,
        proficiency: 95,
    },
    TechProficiency {
        name: "Tailwind CSS",
        category: SkillCategory::Frontend,
        proficiency: 90,
    },
    TechProficiency {
        name: "TypeScript",
        category: SkillCategory::Frontend,
        proficiency: 85,
    },
    TechProficiency {
        name: "Node.js",
        category: SkillCategory::Backend,
        proficiency: 90,
    },
    TechProficiency {
        name: "Express.js",
        category: SkillCategory::Backend,
        proficiency: 88,
    },
    TechProficiency {
        name: "MongoDB",
        category: SkillCategory::Database,
        proficiency: 85,
    },
    TechProficiency {
        name: "OpenAI API",
        category: SkillCategory::AiMl,
        proficiency: 87,
    },
    TechProficiency {
        name: "JWT Auth",
        category: SkillCategory::Security,
        proficiency: 80,
    },
    TechProficiency {
        name: "Razorpay",
        category: SkillCategory::Payments,
        proficiency: 80,
    },
    TechProficiency {
        name: "Amazon S3",
        category: SkillCategory::Cloud,
        proficiency: 78,
    },
    TechProficiency {
        name: "Cypress",
        category: SkillCategory::Testing,
        proficiency: 85,
    },
    TechProficiency {
        name: "Playwright",
        category: SkillCategory::Testing,
        proficiency: 80,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Certificate {
    pub title: &'static str,
    pub platform: &'static str,
    pub image: &'static str,
    pub link: &'static str,
    pub issued: &'static str,
}

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "JavaScript (Basic)",
        platform: "HackerRank",
        image: "/js_basic.png",
        link: "https://www.hackerrank.com/certificates/adc7a13e21ce",
        issued: "June 2025",
    },
    Certificate {
        title: "JavaScript (Intermediate)",
        platform: "HackerRank",
        image: "/js_intermidiate.png",
        link: "https://www.hackerrank.com/certificates/afe175130201",
        issued: "June 2025",
    },
    Certificate {
        title: "React",
        platform: "HackerRank",
        image: "/React.png",
        link: "https://www.hackerrank.com/certificates/21cc06397115",
        issued: "July 2025",
    },
    Certificate {
        title: "Frontend Developer (React)",
        platform: "HackerRank",
        image: "/Frontend.png",
        link: "https://www.hackerrank.com/certificates/88232b5a1f72",
        issued: "July 2025",
    },
    Certificate {
        title: "JavaScript Mastery",
        platform: "NamasteDev",
        image: "https://namastedev.com/assets/images/namaste-javascript.webp",
        link: "https://namastedev.com/monikamonika1379/certificates/namaste-javascript",
        issued: "June 2025",
    },
    Certificate {
        title: "React Essentials",
        platform: "NamasteDev",
        image: "https://namastedev.com/assets/images/namaste-react.webp",
        link: "https://namastedev.com/monikamonika1379/certificates/namaste-react",
        issued: "May 2025",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "mail",
        title: "Email",
        value: "monikamuniraju27@gmail.com",
        link: "mailto:monikamuniraju27@gmail.com",
    },
    ContactChannel {
        icon: "phone",
        title: "Phone",
        value: "+91 9353513002",
        link: "tel:+919353513002",
    },
    ContactChannel {
        icon: "map-pin",
        title: "Location",
        value: "Bangalore, India",
        link: "#",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub icon: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub gradient: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: "linkedin",
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/monika-muniraju/",
        gradient: "from-blue-600 to-blue-700",
    },
    SocialLink {
        icon: "github",
        name: "GitHub",
        url: "https://github.com/MM-27-dev",
        gradient: "from-gray-700 to-gray-800",
    },
    SocialLink {
        icon: "calendar",
        name: "Book via Calendly",
        url: "https://calendly.com/monikamuniraju27",
        gradient: "from-red-500 to-pink-600",
    },
];

/// External form endpoint: submission handling is entirely delegated.
pub const CONTACT_FORM_ENDPOINT: &str = "https://submit-form.com/cbdAlclTr";
pub const CONTACT_FORM_REDIRECT: &str = "https://yourwebsite.com/thank-you";
pub const CONTACT_FORM_NAME: &str = "Portfolio Contact Form";

#[derive(Debug, Clone, Copy)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [NavItem],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Quick Links",
        links: NAV_ITEMS,
    },
    FooterColumn {
        title: "AI Services",
        links: &[
            NavItem {
                name: "AI-Powered Assistants",
                href: "#",
            },
            NavItem {
                name: "Educational AI Tools",
                href: "#",
            },
            NavItem {
                name: "Document Q&A (PDF/DOCX)",
                href: "#",
            },
            NavItem {
                name: "Social Media Content AI",
                href: "#",
            },
            NavItem {
                name: "AI FAQ Chatbots",
                href: "#",
            },
        ],
    },
    FooterColumn {
        title: "Development",
        links: &[
            NavItem {
                name: "Full Stack (MERN)",
                href: "#",
            },
            NavItem {
                name: "JWT Authentication",
                href: "#",
            },
            NavItem {
                name: "Razorpay Integration",
                href: "#",
            },
            NavItem {
                name: "Test Automation (Cypress)",
                href: "#",
            },
            NavItem {
                name: "Deployment (Vercel / Render)",
                href: "#",
            },
        ],
    },
];

// The upstream template shipped footer socials pointing at a placeholder
// account; the footer reuses the real profiles instead.
pub const FOOTER_SOCIALS: &[SocialLink] = &[
    SocialLink {
        icon: "linkedin",
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/monika-muniraju/",
        gradient: "",
    },
    SocialLink {
        icon: "github",
        name: "GitHub",
        url: "https://github.com/MM-27-dev",
        gradient: "",
    },
    SocialLink {
        icon: "mail",
        name: "Email",
        url: "mailto:monikamuniraju27@gmail.com",
        gradient: "",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiencies_stay_in_range() {
        for tech in TECH_STACK {
            assert!(
                tech.proficiency <= 100,
                "{} proficiency out of range: {}",
                tech.name,
                tech.proficiency
            );
        }
    }

    #[test]
    fn test_exactly_one_project_has_labeled_code_links() {
        let multiple = PROJECTS
            .iter()
            .filter(|p| matches!(p.code, CodeLink::Multiple(_)))
            .count();
        assert_eq!(multiple, 1);
        // and the labeled list is never empty
        for project in PROJECTS {
            if let CodeLink::Multiple(links) = project.code {
                assert!(!links.is_empty(), "{} has an empty link list", project.title);
            }
        }
    }

    #[test]
    fn test_featured_projects_lead_the_gallery() {
        assert_eq!(PROJECTS.iter().filter(|p| p.featured).count(), 2);
        assert!(PROJECTS[0].featured && PROJECTS[1].featured);
    }

    #[test]
    fn test_every_list_is_nonempty() {
        assert!(!NAV_ITEMS.is_empty());
        assert!(!HERO_SKILLS.is_empty());
        assert!(!SKILL_CARDS.is_empty());
        assert!(!PROJECTS.is_empty());
        assert!(!EXPERIENCES.is_empty());
        assert!(!TECH_STACK.is_empty());
        assert!(!CERTIFICATES.is_empty());
        assert!(!CONTACT_CHANNELS.is_empty());
        assert!(!SOCIAL_LINKS.is_empty());
        assert!(!FOOTER_COLUMNS.is_empty());
        assert!(!FOOTER_SOCIALS.is_empty());
    }

    #[test]
    fn test_footer_socials_match_site_identity() {
        for social in FOOTER_SOCIALS {
            assert!(
                !social.url.contains("sanjeev"),
                "placeholder template account leaked into {}",
                social.name
            );
        }
    }
}
