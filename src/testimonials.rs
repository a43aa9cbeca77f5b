/// A client quote. Display strings are dictionary keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub quote_key: &'static str,
    pub author_key: &'static str,
    pub role_key: &'static str,
    /// Star rating out of 5
    pub rating: u8,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote_key: "testimonial1Quote",
        author_key: "testimonial1Author",
        role_key: "testimonial1Role",
        rating: 5,
    },
    Testimonial {
        quote_key: "testimonial2Quote",
        author_key: "testimonial2Author",
        role_key: "testimonial2Role",
        rating: 5,
    },
    Testimonial {
        quote_key: "testimonial3Quote",
        author_key: "testimonial3Author",
        role_key: "testimonial3Role",
        rating: 4,
    },
];

impl Testimonial {
    /// Rating as filled and empty stars (e.g., "★★★★☆").
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}
