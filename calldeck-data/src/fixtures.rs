//! Static fixture store
//!
//! Fixed seed collections used as the default/fallback data source.
//! These are never mutated; the action-item collection is copied into
//! application state at startup and only that copy takes the status
//! toggle.

use crate::types::{
    ActionItem, ActionStatus, CallInteraction, Capability, DashboardMetrics, HourlyVolume,
    Outcome, PriceInterval, Priority, Sentiment, SentimentSlice,
};

/// Seed call interactions shown in the interaction log.
pub fn call_interactions() -> Vec<CallInteraction> {
    vec![
        CallInteraction {
            id: "1".into(),
            caller_id: "+1234567890".into(),
            caller_name: "John Smith".into(),
            timestamp: "2025-11-13T10:30:00".into(),
            duration: 180,
            outcome: Outcome::Appointment,
            sentiment: Sentiment::Positive,
            notes: "Customer interested in enterprise plan. Scheduled demo for next week.".into(),
            agent_name: "AI Agent".into(),
        },
        CallInteraction {
            id: "2".into(),
            caller_id: "+1234567891".into(),
            caller_name: "Sarah Johnson".into(),
            timestamp: "2025-11-13T09:15:00".into(),
            duration: 120,
            outcome: Outcome::Callback,
            sentiment: Sentiment::Neutral,
            notes: "Asked about pricing. Will call back after discussing with team.".into(),
            agent_name: "AI Agent".into(),
        },
        CallInteraction {
            id: "3".into(),
            caller_id: "+1234567892".into(),
            caller_name: "Michael Brown".into(),
            timestamp: "2025-11-13T08:45:00".into(),
            duration: 240,
            outcome: Outcome::Appointment,
            sentiment: Sentiment::Positive,
            notes: "Existing customer upgrade inquiry. Booked consultation.".into(),
            agent_name: "AI Agent".into(),
        },
        CallInteraction {
            id: "4".into(),
            caller_id: "+1234567893".into(),
            caller_name: "Emily Davis".into(),
            timestamp: "2025-11-12T16:20:00".into(),
            duration: 90,
            outcome: Outcome::Completed,
            sentiment: Sentiment::Negative,
            notes: "Complaint about service delay. Issue escalated to support team.".into(),
            agent_name: "AI Agent".into(),
        },
        CallInteraction {
            id: "5".into(),
            caller_id: "+1234567894".into(),
            caller_name: "David Wilson".into(),
            timestamp: "2025-11-12T14:10:00".into(),
            duration: 150,
            outcome: Outcome::Appointment,
            sentiment: Sentiment::Positive,
            notes: "New lead from website. Interested in AI capabilities.".into(),
            agent_name: "AI Agent".into(),
        },
        CallInteraction {
            id: "6".into(),
            caller_id: "+1234567895".into(),
            caller_name: "Lisa Anderson".into(),
            timestamp: "2025-11-12T11:30:00".into(),
            duration: 60,
            outcome: Outcome::NoAnswer,
            sentiment: Sentiment::Neutral,
            notes: "Voicemail left. Will attempt callback.".into(),
            agent_name: "AI Agent".into(),
        },
        CallInteraction {
            id: "7".into(),
            caller_id: "+1234567896".into(),
            caller_name: "Robert Taylor".into(),
            timestamp: "2025-11-11T15:45:00".into(),
            duration: 200,
            outcome: Outcome::Appointment,
            sentiment: Sentiment::Positive,
            notes: "Partnership opportunity discussion. Meeting scheduled.".into(),
            agent_name: "AI Agent".into(),
        },
        CallInteraction {
            id: "8".into(),
            caller_id: "+1234567897".into(),
            caller_name: "Jennifer Martinez".into(),
            timestamp: "2025-11-11T13:20:00".into(),
            duration: 110,
            outcome: Outcome::Completed,
            sentiment: Sentiment::Neutral,
            notes: "General inquiry about services. Information provided.".into(),
            agent_name: "AI Agent".into(),
        },
    ]
}

/// Seed action items. Application state takes a copy of this at startup.
pub fn action_items() -> Vec<ActionItem> {
    vec![
        ActionItem {
            id: "1".into(),
            title: "Follow up with John Smith".into(),
            description: "Send enterprise plan details and demo link".into(),
            status: ActionStatus::Pending,
            priority: Priority::High,
            created_at: "2025-11-13T10:35:00".into(),
            due_date: "2025-11-14T17:00:00".into(),
            assigned_to: "Sales Team".into(),
        },
        ActionItem {
            id: "2".into(),
            title: "Prepare pricing proposal for Sarah Johnson".into(),
            description: "Create customized pricing based on team size".into(),
            status: ActionStatus::InProgress,
            priority: Priority::Medium,
            created_at: "2025-11-13T09:20:00".into(),
            due_date: "2025-11-15T17:00:00".into(),
            assigned_to: "Sales Team".into(),
        },
        ActionItem {
            id: "3".into(),
            title: "Schedule Michael Brown consultation".into(),
            description: "Coordinate with product team for upgrade options".into(),
            status: ActionStatus::InProgress,
            priority: Priority::High,
            created_at: "2025-11-13T08:50:00".into(),
            due_date: "2025-11-14T12:00:00".into(),
            assigned_to: "Customer Success".into(),
        },
        ActionItem {
            id: "4".into(),
            title: "Resolve Emily Davis service issue".into(),
            description: "Investigate delay and provide resolution timeline".into(),
            status: ActionStatus::InProgress,
            priority: Priority::High,
            created_at: "2025-11-12T16:25:00".into(),
            due_date: "2025-11-13T18:00:00".into(),
            assigned_to: "Support Team".into(),
        },
        ActionItem {
            id: "5".into(),
            title: "Send AI capabilities overview to David Wilson".into(),
            description: "Include case studies and ROI examples".into(),
            status: ActionStatus::Pending,
            priority: Priority::Medium,
            created_at: "2025-11-12T14:15:00".into(),
            due_date: "2025-11-14T17:00:00".into(),
            assigned_to: "Sales Team".into(),
        },
        ActionItem {
            id: "6".into(),
            title: "Callback Lisa Anderson".into(),
            description: "Attempt second contact regarding initial inquiry".into(),
            status: ActionStatus::Pending,
            priority: Priority::Low,
            created_at: "2025-11-12T11:35:00".into(),
            due_date: "2025-11-13T16:00:00".into(),
            assigned_to: "AI Agent".into(),
        },
        ActionItem {
            id: "7".into(),
            title: "Partnership meeting with Robert Taylor".into(),
            description: "Prepare partnership proposal and terms".into(),
            status: ActionStatus::Pending,
            priority: Priority::High,
            created_at: "2025-11-11T15:50:00".into(),
            due_date: "2025-11-18T10:00:00".into(),
            assigned_to: "Business Development".into(),
        },
        ActionItem {
            id: "8".into(),
            title: "Update CRM integration documentation".into(),
            description: "Documentation needs to reflect recent API changes".into(),
            status: ActionStatus::Completed,
            priority: Priority::Medium,
            created_at: "2025-11-10T09:00:00".into(),
            due_date: "2025-11-13T17:00:00".into(),
            assigned_to: "Technical Team".into(),
        },
    ]
}

/// Subscription catalog.
pub fn capabilities() -> Vec<Capability> {
    vec![
        Capability {
            id: "1".into(),
            name: "AI Call Handler".into(),
            description: "Automated call answering and routing with natural language understanding"
                .into(),
            category: "Voice AI".into(),
            price: 299.0,
            price_interval: PriceInterval::Monthly,
            features: vec![
                "24/7 call handling".into(),
                "Natural language processing".into(),
                "Multi-language support".into(),
                "Call transcription".into(),
                "Sentiment analysis".into(),
            ],
            is_active: true,
        },
        Capability {
            id: "2".into(),
            name: "Appointment Scheduler".into(),
            description: "Intelligent scheduling system with calendar integration".into(),
            category: "Automation".into(),
            price: 199.0,
            price_interval: PriceInterval::Monthly,
            features: vec![
                "Calendar sync (Google, Outlook)".into(),
                "Automated reminders".into(),
                "Timezone handling".into(),
                "Conflict resolution".into(),
                "Custom booking rules".into(),
            ],
            is_active: true,
        },
        Capability {
            id: "3".into(),
            name: "Lead Qualification".into(),
            description: "AI-powered lead scoring and qualification system".into(),
            category: "Sales AI".into(),
            price: 399.0,
            price_interval: PriceInterval::Monthly,
            features: vec![
                "Intelligent lead scoring".into(),
                "Automated qualification".into(),
                "CRM integration".into(),
                "Predictive analytics".into(),
                "Custom criteria".into(),
            ],
            is_active: true,
        },
        Capability {
            id: "4".into(),
            name: "Customer Insights".into(),
            description: "Advanced analytics and sentiment analysis for customer interactions"
                .into(),
            category: "Analytics".into(),
            price: 499.0,
            price_interval: PriceInterval::Monthly,
            features: vec![
                "Sentiment analysis".into(),
                "Trend detection".into(),
                "Custom dashboards".into(),
                "Export capabilities".into(),
                "Real-time insights".into(),
            ],
            is_active: true,
        },
        Capability {
            id: "5".into(),
            name: "Voice Analytics".into(),
            description: "Deep analysis of voice conversations for quality and compliance".into(),
            category: "Analytics".into(),
            price: 349.0,
            price_interval: PriceInterval::Monthly,
            features: vec![
                "Call quality scoring".into(),
                "Compliance monitoring".into(),
                "Keyword detection".into(),
                "Agent performance".into(),
                "Custom alerts".into(),
            ],
            is_active: false,
        },
        Capability {
            id: "6".into(),
            name: "Enterprise Integration".into(),
            description: "Full API access and custom integrations for enterprise needs".into(),
            category: "Enterprise".into(),
            price: 999.0,
            price_interval: PriceInterval::Monthly,
            features: vec![
                "Full API access".into(),
                "Custom webhooks".into(),
                "SSO integration".into(),
                "Dedicated support".into(),
                "SLA guarantee".into(),
            ],
            is_active: true,
        },
    ]
}

/// Baseline metrics used as per-field fallback by the reconciler.
pub fn baseline_metrics() -> DashboardMetrics {
    DashboardMetrics {
        total_calls_handled: 2847,
        calls_growth: 12.3,
        appointments_booked: 1246,
        conversion_rate: 43.8,
        average_response_time: 3.2,
        response_time_improvement: -0.8,
        cost_savings: 48392.0,
        cost_reduction: 35.0,
        first_call_resolution: 87.4,
        fcr_growth: 3.2,
        active_action_items: 12,
        action_items_pending: 8,
        action_items_in_progress: 3,
        action_items_resolved: 1,
    }
}

/// Full three-entry sentiment series shown when no live data is available.
pub fn sentiment_series() -> Vec<SentimentSlice> {
    vec![
        SentimentSlice {
            name: "Positive".into(),
            value: 62,
            color: "#10b981".into(),
        },
        SentimentSlice {
            name: "Neutral".into(),
            value: 28,
            color: "#6b7280".into(),
        },
        SentimentSlice {
            name: "Negative".into(),
            value: 10,
            color: "#ef4444".into(),
        },
    ]
}

/// Hourly call volume for the bar chart.
pub fn call_volume_by_hour() -> Vec<HourlyVolume> {
    let buckets: [(&str, u32); 24] = [
        ("00:00", 12),
        ("01:00", 8),
        ("02:00", 5),
        ("03:00", 3),
        ("04:00", 6),
        ("05:00", 15),
        ("06:00", 28),
        ("07:00", 42),
        ("08:00", 65),
        ("09:00", 87),
        ("10:00", 95),
        ("11:00", 102),
        ("12:00", 78),
        ("13:00", 88),
        ("14:00", 92),
        ("15:00", 85),
        ("16:00", 72),
        ("17:00", 58),
        ("18:00", 45),
        ("19:00", 32),
        ("20:00", 25),
        ("21:00", 18),
        ("22:00", 15),
        ("23:00", 10),
    ];
    buckets
        .iter()
        .map(|(hour, calls)| HourlyVolume {
            hour: (*hour).into(),
            calls: *calls,
        })
        .collect()
}
