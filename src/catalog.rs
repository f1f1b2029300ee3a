//! Static portfolio content.
//!
//! Every record here is defined once at compile time and never mutated; the
//! whole catalog is a set of `'static` tables that the page renders from.

/// Kind of site a project delivered. Closed set used by the gallery filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProjectCategory {
    Business,
    Portfolio,
    Landing,
    WebApp,
    WordPress,
    Ecommerce,
    Saas,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 7] = [
        ProjectCategory::Business,
        ProjectCategory::Portfolio,
        ProjectCategory::Landing,
        ProjectCategory::WebApp,
        ProjectCategory::WordPress,
        ProjectCategory::Ecommerce,
        ProjectCategory::Saas,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ProjectCategory::Business => "business",
            ProjectCategory::Portfolio => "portfolio",
            ProjectCategory::Landing => "landing",
            ProjectCategory::WebApp => "webapp",
            ProjectCategory::WordPress => "wordpress",
            ProjectCategory::Ecommerce => "ecommerce",
            ProjectCategory::Saas => "saas",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Headline numbers shown on a project card. Each figure is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectStats {
    pub users: Option<&'static str>,
    pub performance: Option<&'static str>,
    pub conversion: Option<&'static str>,
}

impl ProjectStats {
    /// Present figures as `(label, value)` pairs, in display order.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        [
            ("Users", self.users),
            ("Performance", self.performance),
            ("Conversion", self.conversion),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub category: ProjectCategory,
    pub live_url: Option<&'static str>,
    pub repo_url: Option<&'static str>,
    pub featured: bool,
    pub stats: Option<ProjectStats>,
    pub challenges: &'static [&'static str],
    pub solutions: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceKind {
    Work,
    Education,
    Freelance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub achievements: &'static [&'static str],
    pub kind: ExperienceKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
    /// Star rating in `1..=5`.
    pub rating: u8,
    pub project_type: Option<&'static str>,
}

/// Skill area. Declaration order is the display order of the skill groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
    Design,
    Mobile,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Tools,
        SkillCategory::Design,
        SkillCategory::Mobile,
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency percentage in `0..=100`.
    pub level: u8,
    pub category: SkillCategory,
    pub icon: Option<&'static str>,
    pub years: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub price: &'static str,
    pub duration: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementCategory {
    Certification,
    Award,
    Milestone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
}

/// A short "why work with me" card in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A big-number counter in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headline {
    pub icon: &'static str,
    pub number: &'static str,
    pub label: &'static str,
}

pub fn project_by_id(catalog: &[Project], id: u32) -> Option<&Project> {
    catalog.iter().find(|p| p.id == id)
}

macro_rules! pexels {
    ($photo:literal, $w:literal) => {
        concat!(
            "https://images.pexels.com/photos/",
            $photo,
            "/pexels-photo-",
            $photo,
            ".jpeg?auto=compress&cs=tinysrgb&w=",
            $w
        )
    };
}

pub static PROJECTS: [Project; 7] = [
    Project {
        id: 1,
        title: "ModernBiz Corporate Website",
        description: "A fully responsive corporate website built for a Mumbai-based consulting firm. Features include service showcases, team profiles, contact integration, and advanced analytics dashboard.",
        image: pexels!("3184287", "500"),
        technologies: &["React", "Tailwind CSS", "Node.js", "Firebase", "Framer Motion"],
        category: ProjectCategory::Business,
        live_url: Some("https://example.com"),
        repo_url: Some("https://github.com/example/project1"),
        featured: true,
        stats: Some(ProjectStats { users: Some("10K+"), performance: Some("98%"), conversion: Some("15%") }),
        challenges: &["Complex data visualization", "Real-time updates", "Mobile optimization"],
        solutions: &["Custom chart components", "WebSocket integration", "Progressive Web App"],
    },
    Project {
        id: 2,
        title: "Creative Designer Portfolio",
        description: "An elegant portfolio website for a graphic designer featuring animated galleries, project showcases, client testimonials, and interactive 3D elements.",
        image: pexels!("196644", "500"),
        technologies: &["HTML", "CSS", "JavaScript", "GSAP", "Three.js"],
        category: ProjectCategory::Portfolio,
        live_url: Some("https://example.com"),
        repo_url: Some("https://github.com/example/project2"),
        featured: true,
        stats: Some(ProjectStats { users: Some("5K+"), performance: Some("95%"), conversion: Some("25%") }),
        challenges: &[],
        solutions: &[],
    },
    Project {
        id: 3,
        title: "FitLife Gym Landing Page",
        description: "High-converting landing page for a fitness center in Delhi with membership forms, class schedules, trainer profiles, and integrated payment system.",
        image: pexels!("1552252", "500"),
        technologies: &["React", "Tailwind CSS", "Firebase", "Stripe API"],
        category: ProjectCategory::Landing,
        live_url: Some("https://example.com"),
        repo_url: None,
        featured: true,
        stats: Some(ProjectStats { users: Some("8K+"), performance: Some("97%"), conversion: Some("35%") }),
        challenges: &[],
        solutions: &[],
    },
    Project {
        id: 4,
        title: "TaskMaster Web App",
        description: "A collaborative task management application with real-time updates, team collaboration features, progress tracking, and advanced reporting.",
        image: pexels!("3184298", "500"),
        technologies: &["React", "Node.js", "Firebase", "Tailwind CSS", "Socket.io"],
        category: ProjectCategory::WebApp,
        live_url: Some("https://example.com"),
        repo_url: Some("https://github.com/example/project4"),
        featured: false,
        stats: Some(ProjectStats { users: Some("2K+"), performance: Some("94%"), conversion: Some("20%") }),
        challenges: &[],
        solutions: &[],
    },
    Project {
        id: 5,
        title: "Local Restaurant WordPress Site",
        description: "WordPress website for a traditional Indian restaurant with online menu, reservation system, customer reviews, and food delivery integration.",
        image: pexels!("262978", "500"),
        technologies: &["WordPress", "PHP", "CSS", "JavaScript", "WooCommerce"],
        category: ProjectCategory::WordPress,
        live_url: Some("https://example.com"),
        repo_url: None,
        featured: true,
        stats: Some(ProjectStats { users: Some("15K+"), performance: Some("92%"), conversion: Some("18%") }),
        challenges: &[],
        solutions: &[],
    },
    Project {
        id: 6,
        title: "E-Commerce Fashion Store",
        description: "Modern e-commerce platform for a fashion brand with advanced filtering, wishlist, cart functionality, and secure payment integration.",
        image: pexels!("1884584", "500"),
        technologies: &["React", "Node.js", "MongoDB", "Stripe", "Tailwind CSS"],
        category: ProjectCategory::Ecommerce,
        live_url: Some("https://example.com"),
        repo_url: Some("https://github.com/example/project6"),
        featured: true,
        stats: Some(ProjectStats { users: Some("25K+"), performance: Some("96%"), conversion: Some("12%") }),
        challenges: &[],
        solutions: &[],
    },
    Project {
        id: 7,
        title: "SaaS Analytics Dashboard",
        description: "Comprehensive analytics dashboard for a SaaS platform with real-time data visualization, custom reports, and user management.",
        image: pexels!("590022", "500"),
        technologies: &["React", "TypeScript", "D3.js", "Node.js", "PostgreSQL"],
        category: ProjectCategory::Saas,
        live_url: Some("https://example.com"),
        repo_url: Some("https://github.com/example/project7"),
        featured: true,
        stats: Some(ProjectStats { users: Some("50K+"), performance: Some("99%"), conversion: Some("28%") }),
        challenges: &[],
        solutions: &[],
    },
];

pub static EXPERIENCES: [Experience; 4] = [
    Experience {
        id: 1,
        title: "Senior Freelance Web Developer",
        company: "Self-Employed",
        period: "2023 - Present",
        description: "Building custom websites and web applications for local businesses across India. Specializing in responsive design, WordPress development, and modern React applications.",
        technologies: &["React", "WordPress", "PHP", "JavaScript", "Tailwind CSS", "Node.js"],
        achievements: &[
            "Delivered 25+ successful projects",
            "Achieved 98% client satisfaction rate",
            "Increased client revenue by average 40%",
        ],
        kind: ExperienceKind::Freelance,
    },
    Experience {
        id: 2,
        title: "Full-Stack Developer",
        company: "TechStart Solutions",
        period: "Jan 2023 - Dec 2023",
        description: "Developed and maintained multiple client websites and web applications. Led a team of 3 junior developers and implemented modern development practices.",
        technologies: &["React", "Node.js", "MongoDB", "Express", "Firebase", "AWS"],
        achievements: &[
            "Led development of 5 major projects",
            "Reduced application load time by 60%",
            "Mentored 3 junior developers",
        ],
        kind: ExperienceKind::Work,
    },
    Experience {
        id: 3,
        title: "Web Development Intern",
        company: "Digital Innovations",
        period: "Jun 2022 - Dec 2022",
        description: "Assisted in developing client websites and maintaining existing web applications. Gained hands-on experience with modern web technologies and client communication.",
        technologies: &["HTML", "CSS", "JavaScript", "React", "Firebase"],
        achievements: &[
            "Completed 10+ client projects",
            "Improved website performance by 45%",
            "Received outstanding intern award",
        ],
        kind: ExperienceKind::Work,
    },
    Experience {
        id: 4,
        title: "Computer Science Student",
        company: "Delhi Technical University",
        period: "2021 - Present",
        description: "Pursuing Bachelor's in Computer Science with focus on web technologies. Active in coding clubs and hackathons, maintaining strong academic performance.",
        technologies: &["Data Structures", "Algorithms", "Web Development", "Database Management"],
        achievements: &["CGPA: 8.5/10", "Won 3 hackathons", "President of Coding Club"],
        kind: ExperienceKind::Education,
    },
];

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        id: 1,
        name: "Rajesh Kumar",
        role: "Business Owner",
        company: "Kumar Consulting",
        content: "Exceptional work! The website perfectly represents our business and has significantly improved our online presence. Professional, timely, and highly recommended.",
        avatar: pexels!("1222271", "100"),
        rating: 5,
        project_type: Some("Corporate Website"),
    },
    Testimonial {
        id: 2,
        name: "Priya Sharma",
        role: "Graphic Designer",
        company: "Creative Studio",
        content: "Amazing portfolio website that showcases my work beautifully. The animations and design are exactly what I envisioned. Thank you for bringing my vision to life!",
        avatar: pexels!("1239291", "100"),
        rating: 5,
        project_type: Some("Portfolio Website"),
    },
    Testimonial {
        id: 3,
        name: "Amit Patel",
        role: "Gym Owner",
        company: "FitLife Fitness",
        content: "The landing page has increased our membership inquiries by 300%! Professional design, fast loading, and mobile-friendly. Excellent collaboration throughout the project.",
        avatar: pexels!("1681010", "100"),
        rating: 5,
        project_type: Some("Landing Page"),
    },
    Testimonial {
        id: 4,
        name: "Sneha Gupta",
        role: "Restaurant Owner",
        company: "Spice Garden",
        content: "Our online orders increased by 250% after the new website launch. The reservation system works flawlessly and customers love the user experience.",
        avatar: pexels!("1130626", "100"),
        rating: 5,
        project_type: Some("WordPress Site"),
    },
];

macro_rules! skill {
    ($name:literal, $level:literal, $cat:ident, $years:literal) => {
        Skill {
            name: $name,
            level: $level,
            category: SkillCategory::$cat,
            icon: None,
            years: Some($years),
        }
    };
}

pub static SKILLS: [Skill; 20] = [
    skill!("HTML", 95, Frontend, 3.0),
    skill!("CSS", 90, Frontend, 3.0),
    skill!("JavaScript", 85, Frontend, 2.5),
    skill!("TypeScript", 75, Frontend, 1.5),
    skill!("React.js", 80, Frontend, 2.0),
    skill!("Next.js", 70, Frontend, 1.0),
    skill!("Tailwind CSS", 90, Frontend, 2.0),
    skill!("Framer Motion", 75, Frontend, 1.0),
    skill!("Node.js", 65, Backend, 1.5),
    skill!("Express.js", 60, Backend, 1.0),
    skill!("PHP", 55, Backend, 2.0),
    skill!("Python", 50, Backend, 1.0),
    skill!("Firebase", 70, Database, 2.0),
    skill!("MongoDB", 60, Database, 1.0),
    skill!("MySQL", 65, Database, 1.5),
    skill!("WordPress", 85, Tools, 2.5),
    skill!("Git/GitHub", 75, Tools, 2.0),
    skill!("Figma", 70, Design, 2.0),
    skill!("Canva", 80, Design, 2.5),
    skill!("React Native", 55, Mobile, 0.5),
];

pub static SERVICES: [Service; 4] = [
    Service {
        id: 1,
        title: "Custom Web Development",
        description: "Build modern, responsive websites tailored to your business needs",
        icon: "Code",
        features: &["Responsive Design", "SEO Optimization", "Performance Optimization", "Cross-browser Compatibility"],
        price: "₹25,000 - ₹1,00,000",
        duration: "2-8 weeks",
    },
    Service {
        id: 2,
        title: "WordPress Development",
        description: "Create powerful WordPress websites with custom themes and plugins",
        icon: "Wordpress",
        features: &["Custom Themes", "Plugin Development", "E-commerce Integration", "Content Management"],
        price: "₹15,000 - ₹75,000",
        duration: "1-6 weeks",
    },
    Service {
        id: 3,
        title: "E-commerce Solutions",
        description: "Build online stores with secure payment integration and inventory management",
        icon: "ShoppingCart",
        features: &["Payment Gateway", "Inventory Management", "Order Tracking", "Admin Dashboard"],
        price: "₹50,000 - ₹2,00,000",
        duration: "4-12 weeks",
    },
    Service {
        id: 4,
        title: "Web App Development",
        description: "Develop interactive web applications with modern frameworks",
        icon: "Smartphone",
        features: &["React/Vue.js", "Real-time Features", "API Integration", "Database Design"],
        price: "₹75,000 - ₹3,00,000",
        duration: "6-16 weeks",
    },
];

pub static BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        id: 1,
        title: "10 Essential Web Development Trends in 2024",
        excerpt: "Discover the latest trends shaping the future of web development, from AI integration to advanced CSS features.",
        image: pexels!("1181671", "500"),
        date: "2024-01-15",
        read_time: "5 min read",
        category: "Web Development",
        tags: &["Trends", "2024", "Frontend", "Technology"],
    },
    BlogPost {
        id: 2,
        title: "Building Responsive Websites: A Complete Guide",
        excerpt: "Learn how to create websites that look great on all devices with modern CSS techniques and best practices.",
        image: pexels!("196644", "500"),
        date: "2024-01-10",
        read_time: "8 min read",
        category: "CSS",
        tags: &["Responsive", "CSS", "Mobile", "Design"],
    },
    BlogPost {
        id: 3,
        title: "React Performance Optimization Tips",
        excerpt: "Boost your React application's performance with these proven optimization techniques and best practices.",
        image: pexels!("3184298", "500"),
        date: "2024-01-05",
        read_time: "6 min read",
        category: "React",
        tags: &["React", "Performance", "Optimization", "JavaScript"],
    },
];

pub static ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        id: 1,
        title: "Google Analytics Certified",
        description: "Completed Google Analytics Individual Qualification",
        date: "2023-12-01",
        icon: "Award",
        category: AchievementCategory::Certification,
    },
    Achievement {
        id: 2,
        title: "Best Web Developer Award",
        description: "Received recognition at Delhi Tech Awards 2023",
        date: "2023-11-15",
        icon: "Trophy",
        category: AchievementCategory::Award,
    },
    Achievement {
        id: 3,
        title: "50+ Projects Completed",
        description: "Successfully delivered over 50 web development projects",
        date: "2023-10-01",
        icon: "Target",
        category: AchievementCategory::Milestone,
    },
    Achievement {
        id: 4,
        title: "React Developer Certification",
        description: "Completed advanced React development certification",
        date: "2023-09-20",
        icon: "Code",
        category: AchievementCategory::Certification,
    },
];

pub static HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        icon: "Code",
        title: "Clean Code",
        description: "Writing maintainable, scalable code that follows best practices and industry standards",
    },
    Highlight {
        icon: "Palette",
        title: "Modern Design",
        description: "Creating beautiful, user-friendly interfaces with attention to detail and accessibility",
    },
    Highlight {
        icon: "Rocket",
        title: "Performance",
        description: "Building fast, optimized websites that deliver exceptional user experience",
    },
    Highlight {
        icon: "Users",
        title: "Client Focus",
        description: "Understanding business needs and delivering solutions that drive real results",
    },
];

pub static HEADLINES: [Headline; 4] = [
    Headline { icon: "Award", number: "50+", label: "Projects Completed" },
    Headline { icon: "Users", number: "25+", label: "Happy Clients" },
    Headline { icon: "Code", number: "3+", label: "Years Experience" },
    Headline { icon: "Coffee", number: "1000+", label: "Cups of Coffee" },
];

/// Image shown beside the about text.
pub const ABOUT_IMAGE: &str = pexels!("3184339", "600");

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<I: IntoIterator<Item = u32>>(ids: I) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate id {id}");
        }
    }

    #[test]
    fn ids_are_unique_per_table() {
        assert_unique(PROJECTS.iter().map(|p| p.id));
        assert_unique(EXPERIENCES.iter().map(|e| e.id));
        assert_unique(TESTIMONIALS.iter().map(|t| t.id));
        assert_unique(SERVICES.iter().map(|s| s.id));
        assert_unique(BLOG_POSTS.iter().map(|b| b.id));
        assert_unique(ACHIEVEMENTS.iter().map(|a| a.id));
    }

    #[test]
    fn levels_and_ratings_stay_in_range() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn category_keys_round_trip() {
        for c in ProjectCategory::ALL {
            assert_eq!(ProjectCategory::from_key(c.key()), Some(c));
        }
        assert_eq!(ProjectCategory::from_key("all"), None);
    }

    #[test]
    fn lookup_by_id() {
        let found = project_by_id(&PROJECTS, 2).map(|p| p.title);
        assert_eq!(found, Some("Creative Designer Portfolio"));
        assert!(project_by_id(&PROJECTS, 99).is_none());
    }

    #[test]
    fn stats_skip_missing_figures() {
        let stats = ProjectStats { users: Some("1K"), performance: None, conversion: Some("9%") };
        assert_eq!(stats.entries(), vec![("Users", "1K"), ("Conversion", "9%")]);
    }

    #[test]
    fn image_urls_are_sized() {
        assert!(PROJECTS.iter().all(|p| p.image.contains("?auto=compress&cs=tinysrgb")));
        assert!(ABOUT_IMAGE.ends_with("w=600"));
    }
}
