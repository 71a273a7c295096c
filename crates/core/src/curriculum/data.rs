use super::{CurriculumModule, CurriculumTrack};
use crate::model::{ModuleId, TrackId};

/// The built-in product-management curriculum, in teaching order.
pub static CURRICULUM: &[CurriculumTrack] = &[
    CurriculumTrack {
        id: TrackId::new(1),
        title: "Product Management Foundations",
        modules: &[
            CurriculumModule {
                id: ModuleId::new(1),
                title: "Introduction to PM Foundations",
                lessons: &[
                    "Feature Opportunity Validation",
                    "Refine User Value",
                    "Refine Business Value",
                    "Validate & Communicate Opportunity",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(2),
                title: "Feature Design",
                lessons: &[
                    "Constrained Divergence",
                    "Iterative Convergence",
                    "Design Approval & Building Alignment",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(3),
                title: "Feature Development",
                lessons: &[
                    "The Feature Development Playbook",
                    "Mapping Your Team",
                    "Preparing for Development",
                    "Managing Execution",
                    "Risk Management",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(4),
                title: "Feature Launch & Iteration",
                lessons: &[
                    "Feature Launch Coordination",
                    "Feature Performance",
                    "Post Launch Communication",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(5),
                title: "Feature Prioritisation",
                lessons: &[
                    "Prerequisites to Roadmap Prioritisation",
                    "Building a List of Roadmap Ideas",
                    "Prioritising Ideas on your Roadmap",
                    "Roadmap Case Study",
                    "Sprint Level Prioritisation",
                ],
            },
        ],
    },
    CurriculumTrack {
        id: TrackId::new(2),
        title: "Data for Product Managers",
        modules: &[
            CurriculumModule {
                id: ModuleId::new(6),
                title: "Altitude Maps",
                lessons: &[
                    "Building an Altitude Map",
                    "Using the Altitude Map",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(7),
                title: "Instrumentation & Generating Data Insights",
                lessons: &[
                    "Taking Control with Instrumentation",
                    "Generating Data Insights",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(8),
                title: "Key Analytical Tools",
                lessons: &[
                    "The 2 Key Analytical Tools",
                    "Segmentation Analysis Deep Dive",
                    "Relationship between Variables Deep Dive",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(9),
                title: "Communicating Persuasively",
                lessons: &[
                    "Communicating Persuasively with Data",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(10),
                title: "Leveraging Data",
                lessons: &[
                    "Leveraging your Data Resources",
                ],
            },
        ],
    },
    CurriculumTrack {
        id: TrackId::new(3),
        title: "Experimentation & A / B Testing",
        modules: &[
            CurriculumModule {
                id: ModuleId::new(11),
                title: "Strategic Experimentation",
                lessons: &[
                    "Why Experimentation is Critical",
                    "Cultural Barriers to Experimentation",
                    "Five Myths of Experimentation",
                    "Strategic vs Ad Hoc Experimentation",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(12),
                title: "Identifying a Strategic Opportunity",
                lessons: &[
                    "Building a Strategic Foundation",
                    "When to Use Experimentation",
                    "3 Components of a Strategic Opportunity",
                    "Understanding Your Strategy",
                    "Defining Your Strategy",
                    "Acquisition & Retention",
                    "Monetisation & Defensibility",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(13),
                title: "Customer Problem",
                lessons: &[
                    "Defining a Customer Problem",
                    "User Insight to Customer Problem",
                    "Data Insight to Customer Problem",
                    "Mistakes in Defining Customer Problems",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(14),
                title: "Business Outcome",
                lessons: &[
                    "Outcome Metrics",
                    "Acquisition Outcome Metrics",
                    "Retention Outcome Metrics",
                    "Monetisation Outcome Metrics",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(15),
                title: "Prioritising & Communicating",
                lessons: &[
                    "Prioritising Your Strategic Opportunities",
                    "Creating a Narrative",
                    "Generating Solutions",
                    "Good vs Great Solution Development",
                    "Design Modifications",
                    "User Psych",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(16),
                title: "Analysing Test Results",
                lessons: &[
                    "Test Launch",
                    "Calling a Test Complete",
                    "Evaluating Test Results",
                    "Iterating",
                    "Implementing Test Wins",
                    "Measuring Value",
                    "Communicating Results",
                ],
            },
        ],
    },
    CurriculumTrack {
        id: TrackId::new(4),
        title: "Mastery Skills for PMs",
        modules: &[
            CurriculumModule {
                id: ModuleId::new(17),
                title: "Mastering Product Strategy",
                lessons: &[
                    "Creating Strategic Foundations",
                    "The 6 Dimensions of Product Strategy",
                    "Target Audience",
                    "Value Proposition",
                    "Strategic Differentiation",
                    "Channel Strategy",
                    "Monetisation Strategy",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(18),
                title: "Mastering Vision Narratives",
                lessons: &[
                    "Creating & Using your Vision",
                    "High Leverage Visions",
                    "Vision Narratives, Not Statements",
                    "Buy-In on your Vision",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(19),
                title: "Feedback Management Systems",
                lessons: &[
                    "Feedback Rivers",
                    "Setting up Your Feedback River",
                    "Feedback Systems of Record",
                    "Using Feedback Management Systems",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(20),
                title: "Mastering Lever Dashboards",
                lessons: &[
                    "Setting up Your Lever Dashboard",
                    "Lever Dashboard Rituals",
                    "KPIs and Roadmaps",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(21),
                title: "Building 4D Roadmaps",
                lessons: &[
                    "The 4 Lenses",
                    "Brainstorming Objectives & Initiatives",
                    "Prioritising Objectives & Initiatives",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(22),
                title: "Creating OKR Loops",
                lessons: &[
                    "Developing Outcome Oriented OKRs",
                    "Writing & Socialising High-Leverage OKRs",
                    "OKR Reviews & Post Mortem",
                    "Avoiding the Pitfalls of OKRs",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(23),
                title: "Empowering Product Specs",
                lessons: &[
                    "Writing the Specifications",
                    "Empowering Context",
                    "Empowering Implementation",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(24),
                title: "Decision Architecture",
                lessons: &[
                    "Decision Budget & Circles",
                    "Determining Your Decision Budget",
                    "Decision Making Circles",
                    "Completing the Decision Loop",
                ],
            },
        ],
    },
    CurriculumTrack {
        id: TrackId::new(5),
        title: "Scaling Product Delivery",
        modules: &[
            CurriculumModule {
                id: ModuleId::new(25),
                title: "Product Conviction",
                lessons: &[
                    "Delivery Systems at Scale",
                    "Customer Value Conviction",
                    "Document Hypothesis",
                    "Refine User Profile & Problem",
                    "Build & Test Solution",
                    "Refine Business Value",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(26),
                title: "Building Impact Conviction",
                lessons: &[
                    "Building a Lo-Fi Model",
                    "Effort & Alignment",
                    "Building Dynamic Delivery Plans",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(27),
                title: "Execution & Adaptation",
                lessons: &[
                    "Product Reviews",
                    "Team Touch Points",
                    "Launch Strategy",
                    "Launch Preparation",
                    "Post Launch Management",
                ],
            },
        ],
    },
    CurriculumTrack {
        id: TrackId::new(6),
        title: "Growing Users for Your Product from PMF → Scale",
        modules: &[
            CurriculumModule {
                id: ModuleId::new(28),
                title: "Developing the PMF Narrative",
                lessons: &[
                    "Building an Initial Insight",
                    "Problem to Solve",
                    "Target Audience",
                    "Value Proposition",
                    "Competitive Advantage",
                    "Growth Strategy",
                    "Business Model & PMF Narrative Synthesis",
                    "Finding PMF Program Snapshot",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(29),
                title: "Validating Riskiest Hypotheses",
                lessons: &[
                    "Risk Validation Techniques",
                    "Risk Validation using Market Research & Expert Advice",
                    "Leading Effective PMF Interviews",
                    "Targeted Risk Validation Techniques",
                ],
            },
            CurriculumModule {
                id: ModuleId::new(30),
                title: "Growing Users",
                lessons: &[
                    "Getting Traction",
                    "Building the First Growth Loop",
                    "Measuring & Evaluating Engagement",
                    "Leveraging NPS Surveys",
                    "Launch Strategy",
                ],
            },
        ],
    },
];
