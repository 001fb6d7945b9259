//! Static marketing copy and the small pieces of UI state around it
//!
//! Everything here is `&'static` data defined once; the landing page reads it
//! directly. [`AccordionState`] and [`Carousel`] hold the FAQ and testimonial
//! selection.

pub struct Hero {
    pub headline: &'static str,
    pub highlight: &'static str,
    pub subtitle: &'static str,
}

pub const HERO: Hero = Hero {
    headline: "Lead Generation",
    highlight: "Rewritten by AI",
    subtitle: "Supercharge productivity with AI-powered automation and integrations built for the next generation of teams.",
};

pub struct Pillar {
    pub title: &'static str,
    pub highlight: &'static str,
    pub description: &'static str,
}

pub const PILLARS: &[Pillar] = &[
    Pillar {
        title: "The Offline-to-Online Bridge",
        highlight: "Zero-Friction Entry",
        description: "We bridge the gap between real-world handshakes and digital workflows. Instantly capture and digitize interactions so no lead is ever lost in the void.",
    },
    Pillar {
        title: "The Digital Brain",
        highlight: "Multi-Agent Swarm",
        description: "Hardware is just the trigger. The swarm is the engine. Our multi-agent system turns a simple tap into a complex, executed sales workflow.",
    },
    Pillar {
        title: "The Unified Command",
        highlight: "Real-Time Control",
        description: "Control the chaos. Manage your physical interactions and digital agents from a single 'Living' Dashboard that puts you in the pilot's seat.",
    },
];

pub struct Agent {
    pub title: &'static str,
    pub description: &'static str,
    pub badge: Option<&'static str>,
}

impl Agent {
    pub fn is_highlighted(&self) -> bool {
        self.badge.is_some()
    }
}

pub const AGENTS: &[Agent] = &[
    Agent {
        title: "Research Agent",
        description: "Enriches contacts from web signals and builds rich profiles.",
        badge: None,
    },
    Agent {
        title: "Scheduling Agent",
        description: "Negotiates meeting times and syncs calendars automatically.",
        badge: None,
    },
    Agent {
        title: "NFC Bridge",
        description: "Tap to capture. Instantly digitizes physical business cards into CRM data.",
        badge: Some("Hardware Included"),
    },
    Agent {
        title: "Meeting Agent",
        description: "Both online and offline meetings can be scheduled from LeadQ base.",
        badge: None,
    },
    Agent {
        title: "Analytics Core",
        description: "Forecasts and highlights risks using pipeline signals.",
        badge: None,
    },
    Agent {
        title: "Email Agent",
        description: "Understands context from meetings, drafts custom emails based on the meeting content.",
        badge: None,
    },
    Agent {
        title: "Speaker Tracking",
        description: "A diarizing agent identifies, separates, and labels different speakers in an audio stream or recording, determining who spoke when.",
        badge: None,
    },
];

pub struct WorkflowStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub const WORKFLOW: &[WorkflowStep] = &[
    WorkflowStep {
        title: "The Lead",
        description: "LeadQ detects a prospect via NFC tap, LinkedIn, or Inbound.",
    },
    WorkflowStep {
        title: "The Swarm",
        description: "AI agents orchestrate research, outreach, and scheduling automatically.",
    },
    WorkflowStep {
        title: "The Result",
        description: "Meeting booked & CRM updated automatically.",
    },
];

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
}

impl Stat {
    pub fn is_positive(&self) -> bool {
        self.trend.starts_with('+')
    }
}

pub const DASHBOARD_STATS: &[Stat] = &[
    Stat {
        label: "Active Leads",
        value: "127",
        trend: "+23%",
    },
    Stat {
        label: "Meetings Scheduled",
        value: "34",
        trend: "+12%",
    },
    Stat {
        label: "AI Tasks Pending",
        value: "8",
        trend: "-5%",
    },
];

/// Monthly pipeline values for the dashboard chart
pub const PIPELINE_CHART: &[(&str, u32)] = &[
    ("Jan", 65),
    ("Feb", 78),
    ("Mar", 85),
    ("Apr", 92),
    ("May", 88),
    ("Jun", 95),
];

/// SVG path through `values`, scaled to a `width` x `height` box with the
/// largest value touching the top edge
pub fn chart_line_path(values: &[u32], width: f64, height: f64) -> String {
    let max = values.iter().copied().max().unwrap_or(0);
    if values.is_empty() || max == 0 {
        return String::new();
    }
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = i as f64 * step;
            let y = height - f64::from(*v) / f64::from(max) * height;
            format!("{} {x:.1},{y:.1}", if i == 0 { "M" } else { "L" })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct UseCase {
    pub title: &'static str,
    pub description: &'static str,
    pub stats: [(&'static str, &'static str); 2],
}

pub const USE_CASES: &[UseCase] = &[
    UseCase {
        title: "Real Estate Agents",
        description: "Capture leads at open houses, property showings, and networking events with instant contact sync and automated follow-ups.",
        stats: [("Faster Lead Capture", "85%"), ("Follow-up Rate", "95%")],
    },
    UseCase {
        title: "B2B SaaS Sales Teams",
        description: "Transform conference badge scans and business card exchanges into qualified pipeline with AI-powered lead scoring and enrichment.",
        stats: [("Pipeline Growth", "3x"), ("Qualification Time", "70%")],
    },
    UseCase {
        title: "Event Organizers",
        description: "Maximize attendee engagement with seamless check-ins, real-time networking features, and post-event nurture campaigns.",
        stats: [("Check-in Speed", "90%"), ("Engagement Rate", "4x")],
    },
    UseCase {
        title: "Consulting Firms",
        description: "Build relationships during client meetings and industry events with intelligent contact management and personalized outreach.",
        stats: [("Client Retention", "92%"), ("Referral Rate", "2.5x")],
    },
    UseCase {
        title: "Financial Services",
        description: "Manage high-value prospects with GDPR-compliant contact capture, automated compliance checks, and secure data handling.",
        stats: [("Compliance Score", "100%"), ("Deal Velocity", "60%")],
    },
    UseCase {
        title: "Startups & Founders",
        description: "Scale your outreach without scaling your team. Automate lead capture, qualification, and nurture campaigns from day one.",
        stats: [("Time Saved", "15hrs/wk"), ("Cost Reduction", "80%")],
    },
];

pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: Option<&'static str>,
    pub credits: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "$49",
        period: Some("/month"),
        credits: "1,000 AI credits/month",
        features: &[
            "Email Agent access",
            "Basic analytics",
            "Email support",
            "1 team member",
            "Core integrations",
        ],
        cta: "Get Started",
        popular: false,
    },
    Plan {
        name: "Pro",
        price: "$100",
        period: Some("/month"),
        credits: "5,000 AI credits/month",
        features: &[
            "All Agents access",
            "Advanced analytics",
            "Priority support",
            "5 team members",
            "NFC capability",
            "Custom workflows",
            "API access",
        ],
        cta: "Get Pro",
        popular: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: None,
        credits: "Unlimited AI credits",
        features: &[
            "Unlimited agents",
            "25,000+ credits/month",
            "White-label options",
            "Dedicated success manager",
            "Unlimited team members",
            "Custom integrations",
            "SLA guarantee",
            "On-premise option",
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How does the credit system work?",
        answer: "Credits are consumed based on agent actions. Lead research costs 1 credit, email sends cost 2 credits, and meeting scheduling costs 3 credits. All plans include monthly credit allocations that reset each billing cycle.",
    },
    Faq {
        question: "Can I integrate LeadQ with Salesforce/HubSpot?",
        answer: "Yes! LeadQ offers native integrations with Salesforce, HubSpot, Pipedrive, and most major CRM platforms. Data syncs bi-directionally in real-time, ensuring your systems are always up to date.",
    },
    Faq {
        question: "Do I need to buy NFC cards separately?",
        answer: "NFC cards are included with Pro and Enterprise plans. Starter plan users can purchase them separately at $2/card. Each card can be reprogrammed unlimited times through the dashboard.",
    },
    Faq {
        question: "Is my data secure and compliant?",
        answer: "Absolutely. We're SOC 2 Type II certified and GDPR compliant. All data is encrypted in transit (TLS 1.3) and at rest (AES-256). We never share your data with third parties.",
    },
    Faq {
        question: "What happens if I run out of credits?",
        answer: "When you run out of credits, agents will pause operations. You'll receive notifications at 90%, 75%, and 50% remaining. You can purchase additional credit packs anytime or upgrade your plan for higher monthly allocations.",
    },
    Faq {
        question: "Can I cancel anytime?",
        answer: "Yes, cancel anytime with no penalties. Your plan remains active until the end of your billing period. All your data will be available for export for 30 days after cancellation.",
    },
    Faq {
        question: "Do you offer onboarding support?",
        answer: "Pro and Enterprise plans include dedicated onboarding with a customer success manager. Starter plan users get access to our comprehensive knowledge base, video tutorials, and email support.",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "LeadQ cut our manual data entry by 70%. Our team can finally focus on closing.",
        name: "Sarah Chen",
        title: "VP Sales, TechCorp",
        rating: 5,
    },
    Testimonial {
        quote: "The AI agents are like having 3 extra SDRs. Our pipeline doubled in 60 days.",
        name: "Marcus Rodriguez",
        title: "Head of Growth, CloudBase",
        rating: 5,
    },
    Testimonial {
        quote: "Best investment we made this year. ROI was positive within the first month.",
        name: "Emily Watson",
        title: "Sales Director, DataSync",
        rating: 5,
    },
];

/// Testimonial carousel auto-advance interval
pub const CAROUSEL_INTERVAL_MS: u32 = 6_000;

/// Granularity of the clock that drives [`Carousel::tick`]
pub const CAROUSEL_TICK_MS: u32 = 1_000;

pub struct FallbackLead {
    pub name: &'static str,
    pub company: &'static str,
    pub role: &'static str,
}

/// Cards for the static marquee shown when the lead-capture animation fails
pub const FALLBACK_LEADS: &[FallbackLead] = &[
    FallbackLead {
        name: "James Peterson",
        company: "TechFlow",
        role: "Sales Director",
    },
    FallbackLead {
        name: "Liam Rogers",
        company: "GreenTech",
        role: "VP Marketing",
    },
    FallbackLead {
        name: "David Thompson",
        company: "Pinkling",
        role: "Creative Strategist",
    },
    FallbackLead {
        name: "Anna Collins",
        company: "ACME Co",
        role: "Business Dev",
    },
    FallbackLead {
        name: "Emily Carter",
        company: "Hexaflow",
        role: "VP Sales",
    },
    FallbackLead {
        name: "Sarah Chen",
        company: "DataSync",
        role: "Account Executive",
    },
];

pub const COPYRIGHT: &str = "© 2026 LeadQ.AI";

/// Single-open accordion: opening an item closes the previous one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index`, or close it if it is already open
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    pub fn close(&mut self) {
        self.open = None;
    }
}

/// Wrapping index over a fixed number of slides.
///
/// Auto-advance is driven by [`Carousel::tick`]. Any manual move restarts the
/// idle count, so a slide picked by the visitor stays up for a full interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    idle_ms: u32,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0, idle_ms: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next_slide(&mut self) {
        self.advance();
        self.idle_ms = 0;
    }

    pub fn prev_slide(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.idle_ms = 0;
    }

    /// Jump to a slide; out-of-range indices are ignored
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
            self.idle_ms = 0;
        }
    }

    /// Account for `elapsed_ms` without interaction, advancing once a full
    /// [`CAROUSEL_INTERVAL_MS`] has passed since the last move
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms >= CAROUSEL_INTERVAL_MS {
            self.advance();
            self.idle_ms = 0;
        }
    }

    fn advance(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accordion_opens_one_at_a_time() {
        let mut faq = AccordionState::default();

        faq.toggle(2);
        assert!(faq.is_open(2));

        faq.toggle(4);
        assert!(faq.is_open(4));
        assert!(!faq.is_open(2));
    }

    #[test]
    fn test_accordion_toggle_closes_open_item() {
        let mut faq = AccordionState::default();
        faq.toggle(1);
        faq.toggle(1);

        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn test_accordion_close() {
        let mut faq = AccordionState::default();
        faq.toggle(0);
        faq.close();
        faq.close();

        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn test_carousel_wraps_both_ways() {
        let mut carousel = Carousel::new(TESTIMONIALS.len());

        carousel.prev_slide();
        assert_eq!(carousel.current(), 2);

        carousel.next_slide();
        carousel.next_slide();
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_carousel_go_to_ignores_out_of_range() {
        let mut carousel = Carousel::new(3);
        carousel.go_to(2);
        carousel.go_to(7);

        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_carousel_auto_advances_after_full_interval() {
        let mut carousel = Carousel::new(3);

        for _ in 0..5 {
            carousel.tick(CAROUSEL_TICK_MS);
        }
        assert_eq!(carousel.current(), 0);

        carousel.tick(CAROUSEL_TICK_MS);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_manual_move_restarts_auto_advance() {
        let mut carousel = Carousel::new(3);

        for _ in 0..5 {
            carousel.tick(CAROUSEL_TICK_MS);
        }
        carousel.next_slide();
        assert_eq!(carousel.current(), 1);

        // One tick later the old schedule would have fired
        carousel.tick(CAROUSEL_TICK_MS);
        assert_eq!(carousel.current(), 1);

        for _ in 0..5 {
            carousel.tick(CAROUSEL_TICK_MS);
        }
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_go_to_restarts_auto_advance() {
        let mut carousel = Carousel::new(3);

        for _ in 0..5 {
            carousel.tick(CAROUSEL_TICK_MS);
        }
        carousel.go_to(2);
        carousel.tick(CAROUSEL_TICK_MS);

        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0);
        carousel.next_slide();
        carousel.prev_slide();

        assert!(carousel.is_empty());
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_exactly_one_highlighted_agent_and_popular_plan() {
        let highlighted: Vec<_> = AGENTS.iter().filter(|a| a.is_highlighted()).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].title, "NFC Bridge");

        let popular: Vec<_> = PLANS.iter().filter(|p| p.popular).map(|p| p.name).collect();
        assert_eq!(popular, vec!["Pro"]);
    }

    #[test]
    fn test_chart_line_path() {
        let path = chart_line_path(&[50, 100, 25], 200.0, 100.0);
        assert_eq!(path, "M 0.0,50.0 L 100.0,0.0 L 200.0,75.0");
    }

    #[test]
    fn test_chart_line_path_degenerate_input() {
        assert_eq!(chart_line_path(&[], 100.0, 100.0), "");
        assert_eq!(chart_line_path(&[0, 0], 100.0, 100.0), "");
        assert_eq!(chart_line_path(&[7], 100.0, 40.0), "M 0.0,0.0");
    }

    #[test]
    fn test_stat_trend_direction() {
        let positive: Vec<_> = DASHBOARD_STATS.iter().map(Stat::is_positive).collect();
        assert_eq!(positive, vec![true, true, false]);
    }
}
