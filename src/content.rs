//! Static page content. Nothing here changes at runtime.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Services,
    Gallery,
    Types,
    Faq,
    Reviews,
    Footer,
}

impl Section {
    /// Page order, top to bottom.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Services,
        Section::Gallery,
        Section::Types,
        Section::Faq,
        Section::Reviews,
        Section::Footer,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Gallery => "gallery",
            Section::Types => "types",
            Section::Faq => "faq",
            Section::Reviews => "reviews",
            Section::Footer => "footer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::Gallery => "Our Work",
            Section::Types => "Who We Help",
            Section::Faq => "FAQ",
            Section::Reviews => "Reviews",
            Section::Footer => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub featured: bool,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Management",
        description: "Arnona, Vaad Bayit, utilities, and tenant calls, all managed.",
        tags: &["Monthly Reports", "24/7 Support"],
        featured: false,
    },
    Service {
        title: "Repairs",
        description: "Painting, leaks, or renovations. Trusted workers at fair prices.",
        tags: &["Quality Control", "Pre-Chagim"],
        featured: true,
    },
    Service {
        title: "Brokerage",
        description: "Finding tenants or buying a foothold in Israel? We guide you.",
        tags: &["Tenant Vetting", "Market Data"],
        featured: false,
    },
];

pub struct Audience {
    pub title: &'static str,
    pub description: &'static str,
}

pub const AUDIENCES: &[Audience] = &[
    Audience { title: "Holiday Homes", description: "Clean and stocked before you land." },
    Audience { title: "Aliyah Properties", description: "Maintained perfectly until your move." },
    Audience { title: "Student Apts", description: "Local support for children in yeshiva/seminary." },
    Audience { title: "Investments", description: "Tenant & rent management for max returns." },
];

pub struct GalleryImage {
    pub url: &'static str,
    pub title: &'static str,
    pub location: &'static str,
}

impl GalleryImage {
    pub fn alt_text(&self) -> String {
        format!(
            "{} renovation project in {}, Israel - Real estate solutions and renovation services by Davidoff RES",
            self.title, self.location
        )
    }
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        url: "https://images.unsplash.com/photo-1600607686527-6fb886090705?q=80&w=1000",
        title: "Living Room Remodel",
        location: "Rehavia",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1556912172-45b7abe8b7e1?q=80&w=1000",
        title: "Modern Kitchen",
        location: "Baka",
    },
];

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?q=80&w=2070&auto=format&fit=crop";

pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub location: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        text: "Our daughter is in seminary. Davidoff handles the internet, bills, and fixes things so she can focus.",
        author: "Rachel G.",
        location: "Brooklyn, NY",
    },
    Testimonial {
        text: "I inherited a property in Beit Shemesh but live in Chicago. They handle tenants and maintenance perfectly.",
        author: "Mark S.",
        location: "Chicago, IL",
    },
    Testimonial {
        text: "We have a holiday apartment. Arriving to a clean home with the boiler on is priceless.",
        author: "The Cohen Family",
        location: "Baltimore, MD",
    },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "How do you handle emergency repairs?",
        answer: "We have a 24/7 emergency line. For urgent issues (leaks, electrical), our team is dispatched immediately. You receive real-time updates via WhatsApp.",
    },
    FaqEntry {
        question: "Do you handle bill payments (Arnona, Vaad)?",
        answer: "Yes. We take over all utility and municipal payments. We can set up standing orders or pay on your behalf and bill you monthly with a single transparent invoice.",
    },
    FaqEntry {
        question: "Can you prepare my apartment for Chagim?",
        answer: "Absolutely. Our 'Chagim Prep' service includes deep cleaning, boiler checks, stocking the fridge, and setting timers so your home is ready the moment you walk in.",
    },
    FaqEntry {
        question: "What are your management fees?",
        answer: "Our fees are tailored to the property size and required services. We offer a transparent monthly flat rate with no hidden percentages on repairs.",
    },
];

/// (value, label) pairs for the quote form's service select.
pub const SERVICE_OPTIONS: &[(&str, &str)] = &[
    ("Property Management", "Property Management"),
    ("Renovations", "Renovations & Repairs"),
    ("Brokerage", "Brokerage (Buy/Rent)"),
    ("Other", "Other"),
];

pub const SEO_TITLE: &str = "Davidoff Real Estate Solutions | Your Eyes & Ears in Israel";
pub const SEO_DESCRIPTION: &str = "Professional real estate solutions in Israel for overseas owners. We handle everything from tenant management, repairs, and renovations to bill payments (Arnona, Vaad Bayit) and Chagim preparation.";
pub const SEO_KEYWORDS: &str = "property management Israel, real estate management Jerusalem, property management services Israel, tenant management Israel, property repairs Israel, holiday home management, aliyah property management";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_round_trip_in_page_order() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "services", "gallery", "types", "faq", "reviews", "footer"]);
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("pricing"), None);
    }

    #[test]
    fn only_repairs_is_featured() {
        let featured: Vec<_> = SERVICES.iter().filter(|s| s.featured).map(|s| s.title).collect();
        assert_eq!(featured, ["Repairs"]);
    }

    #[test]
    fn gallery_alt_text_names_title_and_location() {
        let alt = GALLERY[1].alt_text();
        assert!(alt.starts_with("Modern Kitchen renovation project in Baka"));
    }
}
