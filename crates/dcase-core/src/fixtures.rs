//! Seed dataset.
//!
//! Every store starts from these fixtures; there is no other data source.
//! Ids are small literals, so the stores seed their id counters past them.

use crate::model::{
    Appointment, AppointmentKind, Attorney, Case, CasePriority, CaseStatus, Client, Document,
    DocumentCategory, EntityId, Invoice, InvoiceStatus, SocialLinks, TimelineEntry,
};
use crate::reports::{
    AttorneyPerformance, CaseOutcome, DashboardStats, KpiEntry, ReportSnapshot, RevenuePoint,
    Trend,
};

pub fn seed_clients() -> Vec<Client> {
    vec![
        Client {
            id: EntityId::from_u64(1),
            name: "John Doe".to_string(),
            email: "john@dummy.com".to_string(),
            phone: "+1 234 567 8900".to_string(),
            address: "123 Main St, New York, NY".to_string(),
            case_status: CaseStatus::Active,
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face".to_string(),
            join_date: "2024-01-15".to_string(),
            company: Some("Doe Enterprises".to_string()),
            notes: Some(
                "High-value client with multiple ongoing cases. Prefers email communication."
                    .to_string(),
            ),
            social_media: Some(SocialLinks {
                linkedin: Some("https://linkedin.com/in/johndoe".to_string()),
                twitter: Some("https://twitter.com/johndoe".to_string()),
                ..SocialLinks::default()
            }),
        },
        Client {
            id: EntityId::from_u64(2),
            name: "Jane Smith".to_string(),
            email: "jane@dummy.com".to_string(),
            phone: "+1 234 567 8901".to_string(),
            address: "456 Oak Ave, Los Angeles, CA".to_string(),
            case_status: CaseStatus::Pending,
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face".to_string(),
            join_date: "2024-02-20".to_string(),
            company: Some("Smith & Associates".to_string()),
            notes: Some("Family law case, sensitive matter requiring discretion.".to_string()),
            social_media: Some(SocialLinks {
                linkedin: Some("https://linkedin.com/in/janesmith".to_string()),
                ..SocialLinks::default()
            }),
        },
        Client {
            id: EntityId::from_u64(3),
            name: "Mike Wilson".to_string(),
            email: "mike@dummy.com".to_string(),
            phone: "+1 234 567 8902".to_string(),
            address: "789 Pine St, Chicago, IL".to_string(),
            case_status: CaseStatus::Closed,
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face".to_string(),
            join_date: "2024-03-10".to_string(),
            company: Some("Wilson Corp".to_string()),
            notes: Some(
                "Successfully resolved criminal defense case. Potential for future business."
                    .to_string(),
            ),
            social_media: None,
        },
    ]
}

pub fn seed_cases() -> Vec<Case> {
    vec![
        Case {
            id: EntityId::from_u64(1),
            title: "Business Litigation Case".to_string(),
            client: "John Doe".to_string(),
            attorney: "Mical Lobani".to_string(),
            case_type: "Business Law".to_string(),
            status: CaseStatus::Active,
            priority: CasePriority::High,
            deadline: "2024-12-31".to_string(),
            description:
                "Complex business litigation involving contract disputes and intellectual property rights."
                    .to_string(),
            client_avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face".to_string(),
            progress: Some(65),
            documents: None,
            timeline: Some(vec![
                TimelineEntry {
                    date: "2024-01-15".to_string(),
                    event: "Case Filed".to_string(),
                    description: "Initial case filing and documentation".to_string(),
                },
                TimelineEntry {
                    date: "2024-02-20".to_string(),
                    event: "Discovery Phase".to_string(),
                    description: "Evidence gathering and witness interviews".to_string(),
                },
                TimelineEntry {
                    date: "2024-03-10".to_string(),
                    event: "Mediation Scheduled".to_string(),
                    description: "Mediation session scheduled for next month".to_string(),
                },
            ]),
        },
        Case {
            id: EntityId::from_u64(2),
            title: "Family Custody Case".to_string(),
            client: "Jane Smith".to_string(),
            attorney: "Sarah Johnson".to_string(),
            case_type: "Family Law".to_string(),
            status: CaseStatus::Pending,
            priority: CasePriority::Medium,
            deadline: "2024-11-15".to_string(),
            description:
                "Child custody case involving divorced parents seeking joint custody arrangement."
                    .to_string(),
            client_avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face".to_string(),
            progress: Some(30),
            documents: None,
            timeline: Some(vec![
                TimelineEntry {
                    date: "2024-02-01".to_string(),
                    event: "Initial Consultation".to_string(),
                    description: "First meeting with client".to_string(),
                },
                TimelineEntry {
                    date: "2024-02-15".to_string(),
                    event: "Documentation Review".to_string(),
                    description: "Review of existing custody agreements".to_string(),
                },
            ]),
        },
    ]
}

pub fn seed_attorneys() -> Vec<Attorney> {
    vec![
        Attorney {
            id: EntityId::from_u64(1),
            name: "Mr. Tristan".to_string(),
            email: "tristan@lawfirm.com".to_string(),
            phone: "+1 234 567 8900".to_string(),
            specialization: "Estate Planning Lawyer".to_string(),
            experience: 8,
            rating: 4.8,
            active_cases: 12,
            bio: "Experienced estate planning attorney with expertise in wills, trusts, and probate law. Dedicated to helping families secure their financial future.".to_string(),
            avatar: "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=150&h=150&fit=crop&crop=face".to_string(),
            join_date: "2020-03-15".to_string(),
            social_media: Some(SocialLinks {
                linkedin: Some("https://linkedin.com/in/tristan".to_string()),
                twitter: Some("https://twitter.com/tristan_law".to_string()),
                ..SocialLinks::default()
            }),
            education: Some(vec![
                "Harvard Law School - JD".to_string(),
                "Yale University - BA Political Science".to_string(),
            ]),
            certifications: Some(vec![
                "Estate Planning Specialist".to_string(),
                "Tax Law Certification".to_string(),
            ]),
        },
        Attorney {
            id: EntityId::from_u64(2),
            name: "Mr. Jacob".to_string(),
            email: "jacob@lawfirm.com".to_string(),
            phone: "+1 234 567 8901".to_string(),
            specialization: "Bankruptcy Lawyer".to_string(),
            experience: 6,
            rating: 4.6,
            active_cases: 8,
            bio: "Bankruptcy specialist guiding individuals and small businesses through restructuring and debt relief.".to_string(),
            avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face".to_string(),
            join_date: "2021-06-01".to_string(),
            social_media: None,
            education: Some(vec!["Columbia Law School - JD".to_string()]),
            certifications: None,
        },
        Attorney {
            id: EntityId::from_u64(3),
            name: "Ms. Sophia".to_string(),
            email: "sophia@lawfirm.com".to_string(),
            phone: "+1 234 567 8902".to_string(),
            specialization: "Employment Lawyer".to_string(),
            experience: 10,
            rating: 4.9,
            active_cases: 15,
            bio: "Employment law specialist focusing on workplace rights, discrimination, and labor disputes. Passionate advocate for employee rights.".to_string(),
            avatar: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=150&h=150&fit=crop&crop=face".to_string(),
            join_date: "2019-01-10".to_string(),
            social_media: Some(SocialLinks {
                linkedin: Some("https://linkedin.com/in/sophia-law".to_string()),
                instagram: Some("https://instagram.com/sophia_legal".to_string()),
                ..SocialLinks::default()
            }),
            education: Some(vec![
                "Stanford Law School - JD".to_string(),
                "UC Berkeley - BA Economics".to_string(),
            ]),
            certifications: Some(vec![
                "Employment Law Specialist".to_string(),
                "Mediation Certification".to_string(),
            ]),
        },
        Attorney {
            id: EntityId::from_u64(4),
            name: "Ms. Emma Burton".to_string(),
            email: "emma@lawfirm.com".to_string(),
            phone: "+1 234 567 8903".to_string(),
            specialization: "Family Lawyer".to_string(),
            experience: 12,
            rating: 4.7,
            active_cases: 18,
            bio: "Family law attorney handling custody, divorce, and adoption matters with a settlement-first approach.".to_string(),
            avatar: "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=150&h=150&fit=crop&crop=face".to_string(),
            join_date: "2018-09-20".to_string(),
            social_media: None,
            education: Some(vec!["NYU School of Law - JD".to_string()]),
            certifications: Some(vec!["Certified Family Law Specialist".to_string()]),
        },
    ]
}

pub fn seed_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: EntityId::from_u64(1),
            invoice_number: "INV-2024-001".to_string(),
            client: "John Doe".to_string(),
            amount: 5500.0,
            status: InvoiceStatus::Paid,
            due_date: "2024-12-31".to_string(),
            issue_date: "2024-12-01".to_string(),
            description: "Legal services for business litigation case".to_string(),
        },
        Invoice {
            id: EntityId::from_u64(2),
            invoice_number: "INV-2024-002".to_string(),
            client: "Jane Smith".to_string(),
            amount: 3200.0,
            status: InvoiceStatus::Pending,
            due_date: "2025-01-15".to_string(),
            issue_date: "2024-12-15".to_string(),
            description: "Family law consultation and court representation".to_string(),
        },
        Invoice {
            id: EntityId::from_u64(3),
            invoice_number: "INV-2024-003".to_string(),
            client: "Mike Wilson".to_string(),
            amount: 7800.0,
            status: InvoiceStatus::Overdue,
            due_date: "2024-11-30".to_string(),
            issue_date: "2024-11-01".to_string(),
            description: "Criminal defense legal services".to_string(),
        },
    ]
}

pub fn seed_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: EntityId::from_u64(1),
            title: "Client Consultation".to_string(),
            client: "John Doe".to_string(),
            attorney: "Mical Lobani".to_string(),
            date: "2025-01-15".to_string(),
            time: "10:00".to_string(),
            kind: AppointmentKind::Consultation,
            description: "Initial consultation for business litigation case".to_string(),
        },
        Appointment {
            id: EntityId::from_u64(2),
            title: "Court Hearing".to_string(),
            client: "Jane Smith".to_string(),
            attorney: "Sarah Johnson".to_string(),
            date: "2025-01-20".to_string(),
            time: "14:00".to_string(),
            kind: AppointmentKind::CourtDate,
            description: "Family court hearing for custody case".to_string(),
        },
        Appointment {
            id: EntityId::from_u64(3),
            title: "Contract Review".to_string(),
            client: "Mike Wilson".to_string(),
            attorney: "David Brown".to_string(),
            date: "2025-01-22".to_string(),
            time: "11:00".to_string(),
            kind: AppointmentKind::Meeting,
            description: "Review and finalize contract terms".to_string(),
        },
    ]
}

pub fn seed_documents() -> Vec<Document> {
    vec![
        Document {
            id: EntityId::from_u64(1),
            name: "Business_Contract_JohnDoe.pdf".to_string(),
            kind: "PDF".to_string(),
            size: "2.4 MB".to_string(),
            client: "John Doe".to_string(),
            case: "Business Litigation Case".to_string(),
            upload_date: "2024-12-15".to_string(),
            category: DocumentCategory::Contract,
        },
        Document {
            id: EntityId::from_u64(2),
            name: "Evidence_Photos.zip".to_string(),
            kind: "ZIP".to_string(),
            size: "15.7 MB".to_string(),
            client: "Jane Smith".to_string(),
            case: "Family Custody Case".to_string(),
            upload_date: "2024-12-10".to_string(),
            category: DocumentCategory::Evidence,
        },
        Document {
            id: EntityId::from_u64(3),
            name: "Legal_Brief_Wilson.docx".to_string(),
            kind: "DOCX".to_string(),
            size: "1.2 MB".to_string(),
            client: "Mike Wilson".to_string(),
            // This case was closed and removed; the reference stays orphaned.
            case: "Criminal Defense Case".to_string(),
            upload_date: "2024-12-08".to_string(),
            category: DocumentCategory::LegalBrief,
        },
    ]
}

pub fn report_snapshot() -> ReportSnapshot {
    ReportSnapshot {
        kpis: vec![
            KpiEntry {
                title: "Total Cases".to_string(),
                value: "850".to_string(),
                change: "+12%".to_string(),
                trend: Trend::Up,
            },
            KpiEntry {
                title: "Active Clients".to_string(),
                value: "324".to_string(),
                change: "+8%".to_string(),
                trend: Trend::Up,
            },
            KpiEntry {
                title: "Monthly Revenue".to_string(),
                value: "$125,400".to_string(),
                change: "+15%".to_string(),
                trend: Trend::Up,
            },
            KpiEntry {
                title: "Case Success Rate".to_string(),
                value: "87%".to_string(),
                change: "+3%".to_string(),
                trend: Trend::Up,
            },
        ],
        outcomes: vec![
            CaseOutcome {
                category: "Real Estate".to_string(),
                won: 85,
                lost: 15,
                pending: 10,
            },
            CaseOutcome {
                category: "Corporate".to_string(),
                won: 70,
                lost: 20,
                pending: 15,
            },
            CaseOutcome {
                category: "Employment".to_string(),
                won: 60,
                lost: 25,
                pending: 20,
            },
            CaseOutcome {
                category: "Family Law".to_string(),
                won: 75,
                lost: 18,
                pending: 12,
            },
            CaseOutcome {
                category: "Criminal".to_string(),
                won: 65,
                lost: 30,
                pending: 18,
            },
        ],
        attorneys: vec![
            AttorneyPerformance {
                name: "Ms. Sophia".to_string(),
                cases: 18,
                rating: 4.9,
                revenue: 45000,
            },
            AttorneyPerformance {
                name: "Ms. Emma Burton".to_string(),
                cases: 15,
                rating: 4.7,
                revenue: 38000,
            },
            AttorneyPerformance {
                name: "Mr. Tristan".to_string(),
                cases: 12,
                rating: 4.8,
                revenue: 32000,
            },
            AttorneyPerformance {
                name: "Mr. Jacob".to_string(),
                cases: 8,
                rating: 4.6,
                revenue: 25000,
            },
        ],
    }
}

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_cases: 850,
        won_cases: 170,
        lost_cases: 79,
        monthly_revenue: 85_000,
    }
}

pub fn revenue_series() -> Vec<RevenuePoint> {
    [
        ("Jan", 45_000),
        ("Feb", 52_000),
        ("Mar", 48_000),
        ("Apr", 61_000),
        ("May", 55_000),
        ("Jun", 67_000),
        ("Jul", 72_000),
        ("Aug", 69_000),
        ("Sep", 75_000),
        ("Oct", 78_000),
        ("Nov", 82_000),
        ("Dec", 85_000),
    ]
    .into_iter()
    .map(|(month, revenue)| RevenuePoint { month, revenue })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_ids_are_unique_per_collection() {
        fn unique<I: Iterator<Item = u64>>(ids: I) -> bool {
            let mut seen = std::collections::HashSet::new();
            ids.into_iter().all(|id| seen.insert(id))
        }
        assert!(unique(seed_clients().iter().map(|c| c.id.as_u64())));
        assert!(unique(seed_cases().iter().map(|c| c.id.as_u64())));
        assert!(unique(seed_attorneys().iter().map(|a| a.id.as_u64())));
        assert!(unique(seed_invoices().iter().map(|i| i.id.as_u64())));
        assert!(unique(seed_appointments().iter().map(|a| a.id.as_u64())));
        assert!(unique(seed_documents().iter().map(|d| d.id.as_u64())));
    }

    #[test]
    fn fixture_values_respect_model_bounds() {
        assert!(seed_invoices().iter().all(|i| i.amount >= 0.0));
        assert!(seed_attorneys()
            .iter()
            .all(|a| (0.0..=5.0).contains(&a.rating)));
        assert!(seed_cases()
            .iter()
            .all(|c| c.progress.map_or(true, |p| p <= 100)));
    }

    #[test]
    fn records_serialize_with_camel_case_keys() {
        let json = serde_json::to_value(&seed_clients()[0]).unwrap();
        assert_eq!(json["caseStatus"], "Active");
        assert!(json.get("joinDate").is_some());

        let json = serde_json::to_value(&seed_appointments()[1]).unwrap();
        assert_eq!(json["type"], "Court Date");

        let json = serde_json::to_value(&seed_documents()[2]).unwrap();
        assert_eq!(json["category"], "Legal Brief");
    }
}
