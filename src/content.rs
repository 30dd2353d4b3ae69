// Static copy for the landing page sections.

#[derive(Clone, Copy, PartialEq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct Company {
    pub name: &'static str,
    pub logo: &'static str,
}

pub const BRAND: &str = "DGrealtor";
pub const BRAND_INITIALS: &str = "DR";

pub const HERO_IMAGE: &str = "https://files.catbox.moe/cs01wm.jpg";
pub const FOOTER_IMAGE: &str = "https://files.catbox.moe/oxiusk.jpg";
pub const ABOUT_IMAGE: &str = "https://placehold.co/600x400/e5e7eb/374151?text=Professional+Real+Estate";
pub const SUCCESS_GIF: &str = "https://media.giphy.com/media/l0HlG8vJXW0XzKZsI/giphy.gif";

pub const STATS: [Stat; 4] = [
    Stat { number: "14+", label: "Years Experience", icon: "📈" },
    Stat { number: "500+", label: "Properties Sold", icon: "🏢" },
    Stat { number: "200+", label: "Happy Clients", icon: "👥" },
    Stat { number: "98%", label: "Client Satisfaction", icon: "⭐" },
];

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Commercial Real Estate",
        description: "Find the perfect commercial space for your business",
        icon: "🏢",
    },
    Service {
        title: "Business Location Consulting",
        description: "Expert advice on the best locations for your venture",
        icon: "🏆",
    },
    Service {
        title: "Property Investment",
        description: "Strategic investment opportunities in prime locations",
        icon: "📈",
    },
];

pub const AWARDS: &[&str] = &[
    "Real Estate Excellence Award",
    "Best Client Service 2023",
    "Top Property Deal 2022",
    "Innovation in Real Estate",
    "Customer Satisfaction Award",
    "Best Business Location Expert",
];

pub const CERTIFICATES: &[&str] = &[
    "Certified Real Estate Professional",
    "Advanced Property Valuation",
    "Business Location Specialist",
    "Commercial Real Estate License",
    "Property Investment Consultant",
    "Real Estate Development Expert",
];

pub const COMPANIES: [Company; 5] = [
    Company { name: "Google", logo: "https://placehold.co/120x80/white/333?text=Google" },
    Company { name: "Microsoft", logo: "https://placehold.co/120x80/white/333?text=Microsoft" },
    Company { name: "Apple", logo: "https://placehold.co/120x80/white/333?text=Apple" },
    Company { name: "Amazon", logo: "https://placehold.co/120x80/white/333?text=Amazon" },
    Company { name: "Meta", logo: "https://placehold.co/120x80/white/333?text=Meta" },
];

pub const CONTACT_EMAIL: &str = "info@dgrealtor.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_ADDRESS: &str = "123 Business District, City, State";
