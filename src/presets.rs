//! Built-in sample data.
//!
//! Used as the digest fallback set when sample mode is on and no scan has
//! committed yet, and as the fixture set for view-layer tests.

use crate::types::{Attendee, CallSummary, EnrichedCall};

fn attendee(name: &str, email: &str, role: &str) -> Attendee {
    Attendee {
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        company: None,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Five representative enriched calls spanning the priority tiers, company
/// sizes, and date range the dashboard exercises.
pub fn sample_calls() -> Vec<EnrichedCall> {
    vec![
        EnrichedCall {
            call_id: "call_001".to_string(),
            company_name: "TechVision AI".to_string(),
            call_datetime_ist: "2026-02-21T10:00:00+05:30".to_string(),
            call_date: "2026-02-21".to_string(),
            call_time: "10:00 IST".to_string(),
            original_timezone: "America/New_York".to_string(),
            local_time: "11:30 PM EST".to_string(),
            attendees: vec![
                attendee("Sarah Chen", "sarah@techvision.ai", "CTO"),
                attendee("Mike Ross", "mike@techvision.ai", "VP Engineering"),
            ],
            meeting_platform: "Google Meet".to_string(),
            meeting_link: "https://meet.google.com/abc-defg-hij".to_string(),
            ai_notes: "TechVision AI is exploring our platform for internal knowledge \
                       management and customer-facing chatbots. They have a team of 50+ \
                       engineers and are looking for enterprise-grade AI solutions. High \
                       interest in RAG capabilities and custom model training."
                .to_string(),
            key_topics: strings(&[
                "knowledge management",
                "RAG",
                "enterprise AI",
                "custom training",
            ]),
            action_items: strings(&[
                "Prepare enterprise pricing",
                "Share RAG documentation",
                "Schedule technical deep-dive",
            ]),
            email_thread_summary: "Initial outreach via LinkedIn. Sarah expressed strong \
                                   interest after seeing our latest product demo at AI \
                                   Summit 2026."
                .to_string(),
            company_size_tier: "Enterprise".to_string(),
            employee_count: "1000-5000".to_string(),
            estimated_revenue: "$150M".to_string(),
            industry: "Artificial Intelligence".to_string(),
            priority: "High".to_string(),
            headquarters: "San Francisco, CA".to_string(),
            company_website: "https://techvision.ai".to_string(),
            is_new: true,
            enrichment_confidence: 92,
        },
        EnrichedCall {
            call_id: "call_002".to_string(),
            company_name: "HealthPulse Inc".to_string(),
            call_datetime_ist: "2026-02-21T14:30:00+05:30".to_string(),
            call_date: "2026-02-21".to_string(),
            call_time: "14:30 IST".to_string(),
            original_timezone: "Europe/London".to_string(),
            local_time: "09:00 AM GMT".to_string(),
            attendees: vec![attendee("Dr. Emily Watson", "emily@healthpulse.io", "CEO")],
            meeting_platform: "Zoom".to_string(),
            meeting_link: "https://zoom.us/j/987654321".to_string(),
            ai_notes: "HealthPulse is a digital health startup interested in patient \
                       triage chatbots and clinical decision support. Compliance with \
                       HIPAA is a major concern."
                .to_string(),
            key_topics: strings(&[
                "healthcare AI",
                "HIPAA compliance",
                "patient triage",
                "clinical support",
            ]),
            action_items: strings(&[
                "Prepare HIPAA compliance docs",
                "Demo healthcare use case",
            ]),
            email_thread_summary: "Cold outreach email. Emily responded after reviewing \
                                   our healthcare case studies."
                .to_string(),
            company_size_tier: "Mid-Market".to_string(),
            employee_count: "200-500".to_string(),
            estimated_revenue: "$40M".to_string(),
            industry: "Healthcare Technology".to_string(),
            priority: "Medium".to_string(),
            headquarters: "London, UK".to_string(),
            company_website: "https://healthpulse.io".to_string(),
            is_new: true,
            enrichment_confidence: 78,
        },
        EnrichedCall {
            call_id: "call_003".to_string(),
            company_name: "RetailFlow".to_string(),
            call_datetime_ist: "2026-02-22T11:00:00+05:30".to_string(),
            call_date: "2026-02-22".to_string(),
            call_time: "11:00 IST".to_string(),
            original_timezone: "Asia/Singapore".to_string(),
            local_time: "01:30 PM SGT".to_string(),
            attendees: vec![
                attendee("James Tan", "james@retailflow.com", "Product Manager"),
                attendee("Lisa Ng", "lisa@retailflow.com", "Data Scientist"),
                attendee("David Kim", "david@retailflow.com", "Engineering Lead"),
            ],
            meeting_platform: "Microsoft Teams".to_string(),
            meeting_link: "https://teams.microsoft.com/l/meetup/abc123".to_string(),
            ai_notes: "RetailFlow is a regional e-commerce platform looking to integrate \
                       AI-powered product recommendations and customer support automation."
                .to_string(),
            key_topics: strings(&[
                "e-commerce",
                "product recommendations",
                "customer support",
                "automation",
            ]),
            action_items: strings(&["Send API integration guide", "Prepare e-commerce demo"]),
            email_thread_summary: "Referral from existing customer. Multiple follow-up \
                                   emails about pricing and integration timeline."
                .to_string(),
            company_size_tier: "SMB".to_string(),
            employee_count: "50-200".to_string(),
            estimated_revenue: "$10M".to_string(),
            industry: "E-commerce".to_string(),
            priority: "Low".to_string(),
            headquarters: "Singapore".to_string(),
            company_website: "https://retailflow.com".to_string(),
            is_new: false,
            enrichment_confidence: 65,
        },
        EnrichedCall {
            call_id: "call_004".to_string(),
            company_name: "FinanceEdge Global".to_string(),
            call_datetime_ist: "2026-02-20T16:00:00+05:30".to_string(),
            call_date: "2026-02-20".to_string(),
            call_time: "16:00 IST".to_string(),
            original_timezone: "America/Chicago".to_string(),
            local_time: "05:30 AM CST".to_string(),
            attendees: vec![
                attendee("Robert Miller", "robert@financeedge.com", "Head of Innovation"),
                attendee("Anna Kowalski", "anna@financeedge.com", "AI Strategy Lead"),
            ],
            meeting_platform: "Zoom".to_string(),
            meeting_link: "https://zoom.us/j/111222333".to_string(),
            ai_notes: "FinanceEdge is a large financial services firm exploring AI for \
                       fraud detection, risk assessment, and automated compliance \
                       reporting. Very high budget potential."
                .to_string(),
            key_topics: strings(&[
                "fraud detection",
                "risk assessment",
                "compliance",
                "financial AI",
            ]),
            action_items: strings(&[
                "Prepare security whitepaper",
                "Set up sandbox environment",
                "Connect with legal team",
            ]),
            email_thread_summary: "Enterprise inquiry through website contact form. \
                                   Multiple stakeholders involved in decision."
                .to_string(),
            company_size_tier: "Enterprise".to_string(),
            employee_count: "5000+".to_string(),
            estimated_revenue: "$500M+".to_string(),
            industry: "Financial Services".to_string(),
            priority: "High".to_string(),
            headquarters: "Chicago, IL".to_string(),
            company_website: "https://financeedge.com".to_string(),
            is_new: false,
            enrichment_confidence: 88,
        },
        EnrichedCall {
            call_id: "call_005".to_string(),
            company_name: "EduSpark".to_string(),
            call_datetime_ist: "2026-02-20T09:30:00+05:30".to_string(),
            call_date: "2026-02-20".to_string(),
            call_time: "09:30 IST".to_string(),
            original_timezone: "Asia/Kolkata".to_string(),
            local_time: "09:30 AM IST".to_string(),
            attendees: vec![attendee("Priya Sharma", "priya@eduspark.in", "Founder")],
            meeting_platform: "Google Meet".to_string(),
            meeting_link: "https://meet.google.com/xyz-uvwx-rst".to_string(),
            ai_notes: "EduSpark is an edtech startup building personalized learning \
                       platforms. Interested in adaptive tutoring and content generation."
                .to_string(),
            key_topics: strings(&[
                "edtech",
                "adaptive learning",
                "content generation",
                "tutoring",
            ]),
            action_items: strings(&["Share edtech case studies", "Provide startup pricing"]),
            email_thread_summary: "Direct outreach from founder after attending a webinar."
                .to_string(),
            company_size_tier: "Startup".to_string(),
            employee_count: "10-50".to_string(),
            estimated_revenue: "$2M".to_string(),
            industry: "Education Technology".to_string(),
            priority: "Medium".to_string(),
            headquarters: "Bangalore, India".to_string(),
            company_website: "https://eduspark.in".to_string(),
            is_new: true,
            enrichment_confidence: 70,
        },
    ]
}

/// Matching aggregate summary for [`sample_calls`], dated 2026-02-21.
pub fn sample_summary() -> CallSummary {
    CallSummary {
        total_calls: 5,
        new_calls: 3,
        high_priority: 2,
        medium_priority: 2,
        low_priority: 1,
        todays_calls: 2,
        pipeline_status: "Healthy".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_summary_matches_sample_calls() {
        let derived = crate::normalize::derive_summary(&sample_calls(), "2026-02-21");
        let sample = sample_summary();
        assert_eq!(derived.total_calls, sample.total_calls);
        assert_eq!(derived.new_calls, sample.new_calls);
        assert_eq!(derived.high_priority, sample.high_priority);
        assert_eq!(derived.medium_priority, sample.medium_priority);
        assert_eq!(derived.low_priority, sample.low_priority);
        assert_eq!(derived.todays_calls, sample.todays_calls);
    }

    #[test]
    fn test_sample_ids_unique() {
        let calls = sample_calls();
        let mut ids: Vec<_> = calls.iter().map(|c| c.call_id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), calls.len());
    }
}
