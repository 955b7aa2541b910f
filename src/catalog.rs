pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        icon: "💻",
        title: "Web Development",
        description: "Custom website development with modern technologies, responsive design, and optimized performance. From landing pages to complex web applications with SEO-friendly architecture.",
    },
    Service {
        icon: "📱",
        title: "Meta Ads (Facebook & Instagram)",
        description: "Strategic advertising campaigns across Meta platforms. Targeted audience engagement, conversion optimization, and measurable ROI through Facebook and Instagram ads.",
    },
    Service {
        icon: "🎯",
        title: "Google Ads & Analytics",
        description: "Comprehensive Google Ads management and Google Analytics 4 implementation. Search, Display, and YouTube ad campaigns with detailed performance tracking and optimization.",
    },
    Service {
        icon: "🔍",
        title: "Microsoft & LinkedIn Ads",
        description: "Professional B2B advertising on LinkedIn and Microsoft Advertising Network. Targeted campaigns for business audiences and professional networks.",
    },
    Service {
        icon: "📌",
        title: "Pinterest & X Ads",
        description: "Visual-focused Pinterest advertising and strategic X (formerly Twitter) campaigns. Engage audiences through creative pins and targeted tweets.",
    },
    Service {
        icon: "📊",
        title: "Business Presence & Analytics",
        description: "Google My Business optimization, local SEO, and comprehensive analytics setup. Track and improve your digital presence with data-driven insights.",
    },
];

/// Short (heading, blurb) pairs shown in the about section.
pub const CORE_SERVICES: [(&str, &str); 3] = [
    ("Web Development", "High-performance, fully responsive websites built for scalability and user experience"),
    ("Digital Marketing", "Comprehensive digital marketing across Meta, Google, LinkedIn, X, Pinterest, and Microsoft platforms"),
    ("Analytics & Insights", "Google Analytics 4, performance tracking, and data-driven optimization"),
];

pub const EXPERTISE: [(&str, &str); 3] = [
    ("Digital Marketing Excellence", "Strategic campaigns across Meta, Google, X, LinkedIn, and Pinterest with proven ROI"),
    ("Web Development", "High-performance, responsive websites built for modern businesses"),
    ("Sustainable Solutions", "Eco-friendly digital strategies that minimize environmental impact"),
];

pub const VISION: &str = "Led by Karthikeya Thallapally, a forward-thinking sustainable entrepreneur and digital native, we are a next-generation agency committed to building brands that are not just successful, but truly sustainable.";

pub const MISSION: &str = "At the heart of our mission lies a belief that technology and sustainability are not opposing forces: they are the future of business. We combine impact-driven design with results-focused digital strategy to empower brands to grow responsibly and meaningfully in a rapidly evolving digital landscape.";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn six_services_with_unique_titles() {
        let titles: HashSet<_> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn every_service_has_copy() {
        for service in SERVICES.iter() {
            assert!(!service.icon.is_empty());
            assert!(service.description.len() > 40, "{} description too short", service.title);
        }
    }
}
