#![forbid(unsafe_code)]

//! 2025 payments-industry survey statistics.
//!
//! Hand-authored constant tables with their citations. Labels embed
//! `\n` where the rendered charts wrap them. The figures are taken
//! as published; validating them is out of scope.

/// A labelled numeric series with its citation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStat {
    pub labels: &'static [&'static str],
    pub values: &'static [f64],
    pub source: &'static str,
}

/// A single headline figure with its citation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub year: u16,
    pub source: Option<&'static str>,
}

/// One tracked industry challenge across the survey years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChallengeTrend {
    pub label: &'static str,
    pub values: [f64; 3],
}

pub const OUTLOOK: SeriesStat = SeriesStat {
    labels: &[
        "Positive\nOutlook",
        "Very Positive\nOutlook",
        "Combined\nPositive/Neutral",
        "Negative\nOutlook",
    ],
    values: &[55.0, 20.0, 75.0, 4.0],
    source: "PAY360 2025 State of the Industry Survey",
};

pub const BUDGET_PRIORITIES: SeriesStat = SeriesStat {
    labels: &[
        "Digitalisation &\nTechnology",
        "Partnerships &\nCollaborations",
        "Customer Experience\n& Acquisition",
        "AI/ML Investment\n(Financial Crime)",
    ],
    values: &[45.0, 21.0, 11.0, 53.0],
    source: "PAY360 2025 & Financial Crime 360",
};

pub const BUDGET_EXPECTATIONS: SeriesStat = SeriesStat {
    labels: &["Budget Increase\nExpected", "Budget Decrease\nExpected"],
    values: &[55.0, 9.0],
    source: "PAY360 2025 State of the Industry Survey",
};

pub const AI_USE_CASES: SeriesStat = SeriesStat {
    labels: &[
        "Fraud Detection\n& Prevention",
        "Transaction Monitoring\n& Compliance",
        "Personalized\nCustomer Experiences",
        "Predictive Analytics\n(Customer Behavior)",
        "Dynamic Pricing\n& Offers",
        "Chatbot/Virtual\nAssistant",
    ],
    values: &[85.0, 55.0, 54.0, 51.0, 45.0, 45.0],
    source: "Senior Payment Professionals Survey",
};

pub const CHALLENGE_YEARS: [&str; 3] = ["2023", "2024", "2025"];

pub const CHALLENGES: [ChallengeTrend; 4] = [
    ChallengeTrend {
        label: "Financial Crime & Cybersecurity",
        values: [21.0, 28.0, 30.0],
    },
    ChallengeTrend {
        label: "Compliance",
        values: [25.0, 18.0, 16.0],
    },
    ChallengeTrend {
        label: "Digital Transformation",
        values: [14.0, 10.0, 13.0],
    },
    ChallengeTrend {
        label: "New Payment Methods",
        values: [8.0, 9.0, 13.0],
    },
];

pub const CHALLENGES_SOURCE: &str = "PAY360 State of the Industry Survey";

pub const WORKFORCE_SKILLS: SeriesStat = SeriesStat {
    labels: &[
        "Technical\nExpertise",
        "Customer\nExperience",
        "Data\nAnalytics",
        "Cybersecurity",
        "Regulatory\nKnowledge",
    ],
    values: &[25.0, 20.0, 19.0, 13.0, 13.0],
    source: "PAY360 2025 State of the Industry Survey",
};

pub const WORKFORCE_METRICS: [Metric; 6] = [
    Metric {
        label: "Global Cybersecurity Workforce Gap",
        value: 4_763_963.0,
        unit: "People",
        year: 2024,
        source: Some("ISC2"),
    },
    Metric {
        label: "Cybersecurity Gap Increase",
        value: 19.1,
        unit: "% YoY",
        year: 2024,
        source: Some("ISC2"),
    },
    Metric {
        label: "Organizations with Staffing Shortage",
        value: 67.0,
        unit: "%",
        year: 2024,
        source: Some("ISC2"),
    },
    Metric {
        label: "UK Financial Services Job Applications Decline",
        value: 57.0,
        unit: "% YoY",
        year: 2025,
        source: Some("TPA Payments Talent Report"),
    },
    Metric {
        label: "UK Workers Requiring Upskilling",
        value: 160_000.0,
        unit: "Workers",
        year: 2025,
        source: Some("TPA Payments Talent Report"),
    },
    Metric {
        label: "UK Businesses Lacking Cybersecurity Skills",
        value: 637_000.0,
        unit: "Businesses",
        year: 2025,
        source: Some("TPA Payments Talent Report"),
    },
];

pub const COMPLIANCE_COSTS: SeriesStat = SeriesStat {
    labels: &[
        "Lower Bound\n(% non-interest)",
        "Upper Bound\n(% non-interest)",
        "Average\n(% revenue)",
        "Cross-Industry Avg\n(% revenue)",
        "High Outlier\n(% revenue)",
    ],
    values: &[2.9, 8.7, 19.0, 25.0, 50.0],
    source: "Federal Reserve, Model Office, Ascent RegTech, NorthRow",
};

/// Global payments revenue, in trillion USD. The final year is a
/// projection; charts render the last segment dashed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueSeries {
    pub years: [u16; 8],
    pub values: [f64; 8],
    /// Last actual (non-projected) year.
    pub actual_through: u16,
    pub source: &'static str,
}

pub const GLOBAL_REVENUE: RevenueSeries = RevenueSeries {
    years: [2014, 2019, 2020, 2021, 2022, 2023, 2024, 2030],
    values: [1.3, 1.8, 1.7, 1.9, 2.2, 2.4, 2.5, 3.0],
    actual_through: 2024,
    source: "McKinsey 2025 Global Payments Report",
};

/// Headline figures quoted alongside the revenue chart.
pub const GLOBAL_REVENUE_HIGHLIGHTS: [(&str, &str); 5] = [
    ("CAGR 2019-2024", "7%"),
    ("Projected CAGR 2024-2029", "4%"),
    ("Transaction volume 2024", "3.6 Trillion Transactions"),
    ("Value flows 2024", "$2 Quadrillion USD"),
    ("Average ROE 2024", "18.9%"),
];

pub const FINANCIAL_INSTITUTION_METRICS: [Metric; 6] = [
    Metric {
        label: "Large Banks Annual Compliance Cost",
        value: 200.0,
        unit: "Million USD",
        year: 2025,
        source: None,
    },
    Metric {
        label: "Financial Services Avg Compliance Cost",
        value: 30.9,
        unit: "Million USD",
        year: 2025,
        source: None,
    },
    Metric {
        label: "Financial Crime Compliance Cost (US & Canada)",
        value: 61.0,
        unit: "Billion USD",
        year: 2024,
        source: None,
    },
    Metric {
        label: "Financial Crime Compliance Cost Increase",
        value: 99.0,
        unit: "% of FIs",
        year: 2024,
        source: None,
    },
    Metric {
        label: "Compliance IT Budget Allocation",
        value: 13.4,
        unit: "%",
        year: 2023,
        source: None,
    },
    Metric {
        label: "Compliance IT Budget Allocation (2016 comparison)",
        value: 9.6,
        unit: "%",
        year: 2016,
        source: None,
    },
];

/// AI adoption viewpoints quoted in the outlook panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiIntegration {
    /// Share of senior professionals viewing AI as transformative, %.
    pub senior_professionals_view: f64,
    /// Share of fraud-detection deployments using AI, %.
    pub fraud_detection_adoption: f64,
    pub source: &'static str,
}

pub const AI_INTEGRATION: AiIntegration = AiIntegration {
    senior_professionals_view: 55.0,
    fraud_detection_adoption: 90.0,
    source: "Senior Professionals Survey & Feedzai AI Trends Report",
};

pub const ESG_METRICS: [Metric; 3] = [
    Metric {
        label: "Organizations Increasing ESG Focus Since 2023",
        value: 75.0,
        unit: "% of Organizations",
        year: 2024,
        source: Some("Berkeley Payment Solutions"),
    },
    Metric {
        label: "Global Sustainable Investment",
        value: 30.0,
        unit: "Trillion USD",
        year: 2021,
        source: Some("Tranglo"),
    },
    Metric {
        label: "ESG Payment Deals",
        value: 1.5,
        unit: "Billion USD",
        year: 2021,
        source: Some("Tranglo"),
    },
];
