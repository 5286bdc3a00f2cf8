//! The built-in career catalogue.

use crate::models::career::Career;

/// Industry filter values offered to clients. "All" disables the filter.
pub const INDUSTRIES: &[&str] = &[
    "All",
    "Technology",
    "Healthcare",
    "Finance",
    "Design",
    "Marketing",
    "Education",
];

pub const ALL_INDUSTRIES: &str = "All";

struct CareerSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    match_percentage: u8,
    required_skills: &'static [&'static str],
    average_salary: &'static str,
    growth_rate: &'static str,
    industry: &'static str,
}

const CAREER_SEEDS: &[CareerSeed] = &[
    CareerSeed {
        id: "1",
        title: "Frontend Developer",
        description: "Build user interfaces and experiences for web applications",
        match_percentage: 92,
        required_skills: &["JavaScript", "React", "CSS", "HTML"],
        average_salary: "$75,000 - $120,000",
        growth_rate: "13%",
        industry: "Technology",
    },
    CareerSeed {
        id: "2",
        title: "Data Scientist",
        description: "Analyze complex data to help companies make better decisions",
        match_percentage: 85,
        required_skills: &["Python", "Machine Learning", "Statistics", "SQL"],
        average_salary: "$95,000 - $150,000",
        growth_rate: "22%",
        industry: "Technology",
    },
    CareerSeed {
        id: "3",
        title: "Full Stack Developer",
        description: "Develop both frontend and backend components of web applications",
        match_percentage: 78,
        required_skills: &["JavaScript", "Node.js", "Database", "React"],
        average_salary: "$80,000 - $130,000",
        growth_rate: "15%",
        industry: "Technology",
    },
    CareerSeed {
        id: "4",
        title: "UX Designer",
        description: "Design user experiences and interfaces for digital products",
        match_percentage: 72,
        required_skills: &["Design Thinking", "Figma", "User Research", "Prototyping"],
        average_salary: "$70,000 - $115,000",
        growth_rate: "8%",
        industry: "Design",
    },
    CareerSeed {
        id: "5",
        title: "DevOps Engineer",
        description: "Manage infrastructure and deployment pipelines for applications",
        match_percentage: 68,
        required_skills: &["AWS", "Docker", "Kubernetes", "CI/CD"],
        average_salary: "$90,000 - $140,000",
        growth_rate: "18%",
        industry: "Technology",
    },
    CareerSeed {
        id: "6",
        title: "Product Manager",
        description: "Lead product strategy and coordinate development teams",
        match_percentage: 65,
        required_skills: &["Product Strategy", "Analytics", "Communication", "Agile"],
        average_salary: "$100,000 - $160,000",
        growth_rate: "12%",
        industry: "Technology",
    },
    CareerSeed {
        id: "7",
        title: "Cybersecurity Analyst",
        description: "Protect organizations from digital threats and vulnerabilities",
        match_percentage: 62,
        required_skills: &["Network Security", "Penetration Testing", "Risk Assessment", "Compliance"],
        average_salary: "$85,000 - $125,000",
        growth_rate: "31%",
        industry: "Technology",
    },
    CareerSeed {
        id: "8",
        title: "Digital Marketing Manager",
        description: "Develop and execute digital marketing strategies across channels",
        match_percentage: 58,
        required_skills: &["SEO", "Social Media", "Analytics", "Content Marketing"],
        average_salary: "$65,000 - $100,000",
        growth_rate: "10%",
        industry: "Marketing",
    },
    CareerSeed {
        id: "9",
        title: "Mobile App Developer",
        description: "Create mobile applications for iOS and Android platforms",
        match_percentage: 75,
        required_skills: &["React Native", "Swift", "Kotlin", "Mobile UI/UX"],
        average_salary: "$80,000 - $130,000",
        growth_rate: "22%",
        industry: "Technology",
    },
    CareerSeed {
        id: "10",
        title: "Business Analyst",
        description: "Analyze business processes and recommend improvements",
        match_percentage: 55,
        required_skills: &["Business Analysis", "SQL", "Excel", "Process Mapping"],
        average_salary: "$70,000 - $110,000",
        growth_rate: "14%",
        industry: "Business",
    },
];

impl CareerSeed {
    fn to_career(&self) -> Career {
        Career {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            match_percentage: self.match_percentage,
            required_skills: self.required_skills.iter().map(|s| s.to_string()).collect(),
            average_salary: self.average_salary.to_string(),
            growth_rate: self.growth_rate.to_string(),
            industry: self.industry.to_string(),
        }
    }
}

/// Builds the catalogue in its canonical order.
pub fn default_catalog() -> Vec<Career> {
    CAREER_SEEDS.iter().map(CareerSeed::to_career).collect()
}
