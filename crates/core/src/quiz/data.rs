use super::bank::StaticQuestion;

/// Questions written for specific lesson titles.
pub(super) static BY_TITLE: &[(&str, &[StaticQuestion])] = &[
    (
        "Feature Opportunity Validation",
        &[
            StaticQuestion {
                id: 10101,
                question: "What is the primary goal of opportunity validation?",
                options: &[
                    "Confirm a problem is worth solving for users and business",
                    "Define a detailed technical solution",
                    "Create a high-fidelity prototype",
                    "Estimate exact revenue impact to the dollar",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10102,
                question: "Which statement format helps clarify the problem?",
                options: &[
                    "\"Add a new feature for everyone\"",
                    "\"[User] struggles with [problem] because [root cause]\"",
                    "\"We need to improve NPS fast\"",
                    "\"Competitors have this feature\"",
                ],
                correct_answer: 1,
                explanation: None,
            },
            StaticQuestion {
                id: 10103,
                question: "What are lightweight validation methods mentioned?",
                options: &[
                    "Fake door and concierge MVP",
                    "Massive rewrite and big-bang launch",
                    "Only surveys with 10,000 users",
                    "Executive review",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10104,
                question: "Strategic fit means the opportunity…",
                options: &[
                    "Matches company strategy and goals",
                    "Is easy to implement",
                    "Has the nicest UI",
                    "Uses the latest framework",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10105,
                question: "A leading indicator is best described as…",
                options: &[
                    "An early signal you can move in weeks",
                    "Revenue reported at quarter end",
                    "A vanity metric",
                    "An engineer’s estimate",
                ],
                correct_answer: 0,
                explanation: None,
            },
        ],
    ),
    (
        "Refine User Value",
        &[
            StaticQuestion {
                id: 10201,
                question: "What tool focuses on value from the user’s perspective?",
                options: &[
                    "User stories",
                    "Burndown charts",
                    "Server logs",
                    "CSS frameworks",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10202,
                question: "The “5 Whys” technique helps you:",
                options: &[
                    "Reach root causes behind symptoms",
                    "Create pixel-perfect UI",
                    "Generate marketing slogans",
                    "Choose a database",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10203,
                question: "Personas should include which elements?",
                options: &[
                    "Goals, motivations, frustrations",
                    "Only job title",
                    "Favorite color",
                    "Office location only",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10204,
                question: "Low‑fidelity prototypes are used to:",
                options: &[
                    "Quickly test flows and concepts",
                    "Finalize the visual design",
                    "Stress test infrastructure",
                    "Replace research entirely",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10205,
                question: "A good user story format is:",
                options: &[
                    "As a [user], I want [action], so that [benefit]",
                    "We should build [feature] because devs like it",
                    "As a PM, I want fewer bugs",
                    "Implement [API] ASAP",
                ],
                correct_answer: 0,
                explanation: None,
            },
        ],
    ),
    (
        "Refine Business Value",
        &[
            StaticQuestion {
                id: 10301,
                question: "Business value should connect to:",
                options: &[
                    "Company goals like revenue or retention",
                    "Aesthetic preferences",
                    "Latest tech trends",
                    "Personal OKRs only",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10302,
                question: "Which describes leading vs lagging metrics?",
                options: &[
                    "Leading are early signals; lagging show ultimate results",
                    "Leading are yearly; lagging are daily",
                    "Leading are qualitative; lagging are always qualitative",
                    "They are interchangeable",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10303,
                question: "A simple impact model should:",
                options: &[
                    "Make assumptions explicit and estimate outcomes",
                    "Guarantee exact revenue",
                    "Replace experimentation",
                    "Ignore costs",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10304,
                question: "Cost/benefit analysis helps you:",
                options: &[
                    "Judge ROI vs effort and risk",
                    "Pick the trendiest idea",
                    "Avoid stakeholder input",
                    "Finalize UI animations",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10305,
                question: "A clear business case includes:",
                options: &[
                    "Metrics and expected impact",
                    "Only wireframes",
                    "Executive quotes",
                    "Debug logs",
                ],
                correct_answer: 0,
                explanation: None,
            },
        ],
    ),
    (
        "Validate & Communicate Opportunity",
        &[
            StaticQuestion {
                id: 10401,
                question: "Which three criteria define a strong opportunity?",
                options: &[
                    "Strategic fit, user value, business value",
                    "Coolness, novelty, speed",
                    "Budget, deadline, team size",
                    "Tech, design, marketing",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10402,
                question: "Which doc should contain goals, personas, and scope?",
                options: &[
                    "PRD",
                    "System architecture spec",
                    "Annual report",
                    "Test plan only",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10403,
                question: "A “fake door” test measures:",
                options: &[
                    "User interest prior to building",
                    "Server response times",
                    "Design fidelity",
                    "Legal compliance",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10404,
                question: "Effective stakeholder alignment requires:",
                options: &[
                    "Tailoring the message to stakeholder perspectives",
                    "Sharing all raw data only",
                    "Skipping technical feasibility",
                    "Avoiding the “why”",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10405,
                question: "A good problem statement is:",
                options: &[
                    "Specific user, problem, and root cause",
                    "A feature wishlist",
                    "A budget approval form",
                    "A competitive slogan",
                ],
                correct_answer: 0,
                explanation: None,
            },
        ],
    ),
    (
        "Constrained Divergence",
        &[
            StaticQuestion {
                id: 10501,
                question: "Constrained divergence aims to:",
                options: &[
                    "Explore broadly within defined limits",
                    "Ship without reviews",
                    "Finalize visuals first",
                    "Skip research",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10502,
                question: "Which is a recommended technique?",
                options: &[
                    "Crazy Eights",
                    "Waterfall handoff",
                    "Production refactor",
                    "Code freeze",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10503,
                question: "Votes should be anchored to:",
                options: &[
                    "Success metric",
                    "Team hierarchy",
                    "Design trend",
                    "Personal taste",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10504,
                question: "Outcome of the session is:",
                options: &[
                    "1–2 testable concepts with flows and signals",
                    "A full production build",
                    "A marketing campaign",
                    "A hiring plan",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10505,
                question: "Timeboxes help you:",
                options: &[
                    "Beat perfectionism",
                    "Increase scope",
                    "Avoid decisions",
                    "Skip documentation",
                ],
                correct_answer: 0,
                explanation: None,
            },
        ],
    ),
    (
        "Iterative Convergence",
        &[
            StaticQuestion {
                id: 10601,
                question: "The goal of convergence is to:",
                options: &[
                    "Narrow to a validated solution",
                    "Generate endless ideas",
                    "Freeze scope",
                    "Avoid user tests",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10602,
                question: "Low‑fi prototypes are used to:",
                options: &[
                    "Test concepts cheaply",
                    "Final polish",
                    "Load test servers",
                    "Replace metrics",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10603,
                question: "A healthy loop is:",
                options: &[
                    "Refine → test → refine",
                    "Design → ship → forget",
                    "Spec → build only",
                    "Research once only",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10604,
                question: "Increase fidelity after:",
                options: &[
                    "Validating core flow",
                    "Team approval",
                    "Budget approval",
                    "Scheduling a review",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10605,
                question: "Deliverable of convergence is:",
                options: &[
                    "Validated user flow with risks noted",
                    "Production code",
                    "Marketing brief only",
                    "Hiring plan",
                ],
                correct_answer: 0,
                explanation: None,
            },
        ],
    ),
    (
        "Design Approval & Building Alignment",
        &[
            StaticQuestion {
                id: 10701,
                question: "Start your alignment narrative with:",
                options: &[
                    "The user problem and business opportunity",
                    "Code diffs",
                    "Budget lines",
                    "Font choices",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10702,
                question: "Presenting a day‑in‑the‑life is useful to:",
                options: &[
                    "Show the \"aha\" value moment",
                    "Demonstrate CI/CD",
                    "Prove uptime",
                    "Replace testing",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10703,
                question: "Formal sign‑off should include:",
                options: &[
                    "Approvers, criteria, and change control",
                    "Only a calendar invite",
                    "A Slack thread",
                    "A marketing draft",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10704,
                question: "Engineering cares primarily about:",
                options: &[
                    "Edge cases and feasibility details",
                    "Executive quotes",
                    "Press coverage",
                    "CSS frameworks",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10705,
                question: "Feedback should be:",
                options: &[
                    "Collaborative and grounded in data",
                    "Avoided to save time",
                    "Only positive",
                    "Anonymous only",
                ],
                correct_answer: 0,
                explanation: None,
            },
        ],
    ),
    (
        "The Feature Development Playbook",
        &[
            StaticQuestion {
                id: 10801,
                question: "Which is a required quality gate before done?",
                options: &[
                    "Instrumentation and docs",
                    "Team pizza party",
                    "A/B test always",
                    "Zero lines of code changed",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10802,
                question: "Thin slices should be:",
                options: &[
                    "User‑visible value behind a flag",
                    "Backend only",
                    "Design‑only",
                    "A full release only",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10803,
                question: "Execution cadence recommends:",
                options: &[
                    "Daily progress demos and fast blocker surfacing",
                    "Weekly silent updates",
                    "Async only",
                    "No demos",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10804,
                question: "A staged rollout is used for:",
                options: &[
                    "Controlled launch with guardrails and rollback",
                    "Instant 100% launch",
                    "Marketing only",
                    "Design review only",
                ],
                correct_answer: 0,
                explanation: None,
            },
            StaticQuestion {
                id: 10805,
                question: "An anti‑pattern is:",
                options: &[
                    "All‑or‑nothing releases",
                    "Thin slicing",
                    "Event planning before code",
                    "Transparent change logs",
                ],
                correct_answer: 0,
                explanation: None,
            },
        ],
    ),
];

/// Older ten-question sets keyed by lesson id.
pub(super) static BY_LESSON_ID: &[(u32, &[StaticQuestion])] = &[
    (
        1,
        &[
            StaticQuestion {
                id: 1,
                question: "What is the primary role of a Product Manager?",
                options: &[
                    "To write code for the product",
                    "To bridge business, technology, and user experience",
                    "To manage the development team directly",
                    "To handle customer support issues",
                ],
                correct_answer: 1,
                explanation: Some("Product Managers serve as the strategic bridge between business objectives, technical capabilities, and user needs."),
            },
            StaticQuestion {
                id: 2,
                question: "Who owns the 'what' and 'why' of a product?",
                options: &[
                    "Engineering team",
                    "Product Manager",
                    "Design team",
                    "Marketing team",
                ],
                correct_answer: 1,
                explanation: Some("Product Managers own the 'what' and 'why', while engineering owns the 'how'."),
            },
            StaticQuestion {
                id: 3,
                question: "Which is NOT a key responsibility of a Product Manager?",
                options: &[
                    "Define product vision and strategy",
                    "Write production code",
                    "Gather and prioritize requirements",
                    "Analyze market needs",
                ],
                correct_answer: 1,
                explanation: Some("Product Managers don't typically write production code - that's the engineering team's responsibility."),
            },
            StaticQuestion {
                id: 4,
                question: "What mindset should a PM have regarding customers?",
                options: &[
                    "Customer satisfaction",
                    "Customer obsession",
                    "Customer awareness",
                    "Customer compliance",
                ],
                correct_answer: 1,
                explanation: Some("Great PMs have customer obsession - they deeply understand and prioritize customer needs."),
            },
            StaticQuestion {
                id: 5,
                question: "Product Managers are often referred to as:",
                options: &[
                    "CTO of the product",
                    "CEO of the product",
                    "Designer of the product",
                    "Engineer of the product",
                ],
                correct_answer: 1,
                explanation: Some("PMs are often called 'CEO of the product' because they have strategic ownership without direct authority."),
            },
            StaticQuestion {
                id: 6,
                question: "Which is a core PM principle?",
                options: &[
                    "Opinion-driven decisions",
                    "Data-driven decision making",
                    "Intuition-only decisions",
                    "Authority-based decisions",
                ],
                correct_answer: 1,
                explanation: Some("Great PMs make data-driven decisions backed by user research and metrics."),
            },
            StaticQuestion {
                id: 7,
                question: "What should great products do?",
                options: &[
                    "Use the latest technology",
                    "Solve real problems for real people",
                    "Have the most features",
                    "Look visually appealing",
                ],
                correct_answer: 1,
                explanation: Some("Great products solve real problems for real people - this is the fundamental principle of product management."),
            },
            StaticQuestion {
                id: 8,
                question: "Which skill is essential for Product Managers?",
                options: &[
                    "Advanced coding",
                    "Strong communication",
                    "Graphic design",
                    "Financial accounting",
                ],
                correct_answer: 1,
                explanation: Some("Strong communication is essential as PMs work with cross-functional teams and stakeholders."),
            },
            StaticQuestion {
                id: 9,
                question: "Product Managers collaborate primarily with:",
                options: &[
                    "Only the CEO",
                    "Engineering and design teams",
                    "Only customers",
                    "Only marketing team",
                ],
                correct_answer: 1,
                explanation: Some("PMs work closely with engineering and design teams to build products, along with other stakeholders."),
            },
            StaticQuestion {
                id: 10,
                question: "Strategic thinking in product management involves:",
                options: &[
                    "Daily task management",
                    "Long-term vision and planning",
                    "Code review processes",
                    "Customer support tickets",
                ],
                correct_answer: 1,
                explanation: Some("Strategic thinking involves long-term vision and planning to guide product decisions."),
            },
        ],
    ),
    (
        2,
        &[
            StaticQuestion {
                id: 11,
                question: "A well-written user story should include:",
                options: &[
                    "Only technical implementation details",
                    "User type, goal, and benefit",
                    "Just the feature description",
                    "Only the acceptance criteria",
                ],
                correct_answer: 1,
                explanation: Some("User stories follow the format 'As a [user type], I want [goal], so that [benefit]'."),
            },
            StaticQuestion {
                id: 12,
                question: "What does the 'I' in INVEST principles stand for?",
                options: &[
                    "Important",
                    "Independent",
                    "Immediate",
                    "Innovative",
                ],
                correct_answer: 1,
                explanation: Some("In INVEST, 'I' stands for Independent - stories should be self-contained."),
            },
            StaticQuestion {
                id: 13,
                question: "The WHO component of a user story refers to:",
                options: &[
                    "The development team",
                    "Clear user persona",
                    "The product manager",
                    "The stakeholder",
                ],
                correct_answer: 1,
                explanation: Some("WHO refers to the clear user persona or user type the story is written for."),
            },
            StaticQuestion {
                id: 14,
                question: "Acceptance criteria should be:",
                options: &[
                    "Vague and flexible",
                    "Specific and testable",
                    "Only technical",
                    "Written by developers only",
                ],
                correct_answer: 1,
                explanation: Some("Acceptance criteria should be specific and testable to clearly define 'done'."),
            },
            StaticQuestion {
                id: 15,
                question: "What should user stories focus on?",
                options: &[
                    "Outputs only",
                    "Outcomes, not outputs",
                    "Technical specifications",
                    "Design details",
                ],
                correct_answer: 1,
                explanation: Some("Focus on outcomes - what problem are we solving, not just what we're building."),
            },
            StaticQuestion {
                id: 16,
                question: "The 'V' in INVEST stands for:",
                options: &[
                    "Visible",
                    "Valuable",
                    "Verified",
                    "Valid",
                ],
                correct_answer: 1,
                explanation: Some("In INVEST, 'V' stands for Valuable - each story should provide business value."),
            },
            StaticQuestion {
                id: 17,
                question: "User stories capture:",
                options: &[
                    "How to build features",
                    "What users need and why",
                    "Technical architecture",
                    "Design specifications",
                ],
                correct_answer: 1,
                explanation: Some("User stories capture what users need and why they need it, not how to build it."),
            },
            StaticQuestion {
                id: 18,
                question: "The benefit part of a user story explains:",
                options: &[
                    "Technical requirements",
                    "Business value/user benefit",
                    "Implementation steps",
                    "Testing procedures",
                ],
                correct_answer: 1,
                explanation: Some("The benefit explains the business value or user benefit - why this story matters."),
            },
            StaticQuestion {
                id: 19,
                question: "Good user stories should be:",
                options: &[
                    "Large and comprehensive",
                    "Small and manageable",
                    "Technical and detailed",
                    "Abstract and general",
                ],
                correct_answer: 1,
                explanation: Some("The 'S' in INVEST stands for Small - stories should be small and manageable."),
            },
            StaticQuestion {
                id: 20,
                question: "Who typically writes user stories?",
                options: &[
                    "Only developers",
                    "Product managers with team input",
                    "Only designers",
                    "Only stakeholders",
                ],
                correct_answer: 1,
                explanation: Some("Product managers typically write user stories, often with input from the entire team."),
            },
        ],
    ),
    (
        3,
        &[
            StaticQuestion {
                id: 21,
                question: "What does DAU stand for in product metrics?",
                options: &[
                    "Daily Application Usage",
                    "Data Analysis Unit",
                    "Daily Active Users",
                    "Direct Acquisition Users",
                ],
                correct_answer: 2,
                explanation: Some("DAU stands for Daily Active Users, measuring unique users engaging daily with your product."),
            },
            StaticQuestion {
                id: 22,
                question: "CAC stands for:",
                options: &[
                    "Customer Acquisition Cost",
                    "Customer Activity Count",
                    "Content Access Control",
                    "Customer Account Creation",
                ],
                correct_answer: 0,
                explanation: Some("CAC stands for Customer Acquisition Cost - how much it costs to acquire a new customer."),
            },
            StaticQuestion {
                id: 23,
                question: "Which is an engagement metric?",
                options: &[
                    "Revenue per user",
                    "Session duration",
                    "Cost per acquisition",
                    "Net Promoter Score",
                ],
                correct_answer: 1,
                explanation: Some("Session duration measures how long users engage with your product."),
            },
            StaticQuestion {
                id: 24,
                question: "CLV stands for:",
                options: &[
                    "Customer Login Validation",
                    "Customer Lifetime Value",
                    "Customer Level Verification",
                    "Customer Loss Volume",
                ],
                correct_answer: 1,
                explanation: Some("CLV stands for Customer Lifetime Value - the total value a customer brings over their lifetime."),
            },
            StaticQuestion {
                id: 25,
                question: "The North Star Framework suggests:",
                options: &[
                    "Track everything possible",
                    "Choose ONE key metric",
                    "Focus only on revenue",
                    "Ignore user metrics",
                ],
                correct_answer: 1,
                explanation: Some("The North Star Framework suggests choosing ONE metric that best captures your product's value."),
            },
            StaticQuestion {
                id: 26,
                question: "NPS stands for:",
                options: &[
                    "New Product Score",
                    "Net Promoter Score",
                    "Number of Product Sales",
                    "Network Performance Statistics",
                ],
                correct_answer: 1,
                explanation: Some("NPS stands for Net Promoter Score, measuring customer satisfaction and loyalty."),
            },
            StaticQuestion {
                id: 27,
                question: "Churn rate measures:",
                options: &[
                    "New user acquisition",
                    "Users who stop using the product",
                    "Feature adoption",
                    "Revenue growth",
                ],
                correct_answer: 1,
                explanation: Some("Churn rate measures the percentage of users who stop using your product over time."),
            },
            StaticQuestion {
                id: 28,
                question: "What should you remember about correlation and causation?",
                options: &[
                    "They're the same thing",
                    "Correlation equals causation",
                    "Correlation does not equal causation",
                    "Causation is less important",
                ],
                correct_answer: 2,
                explanation: Some("Correlation ≠ Causation. Always dig deeper into the 'why' behind your numbers."),
            },
            StaticQuestion {
                id: 29,
                question: "Cohort analysis helps track:",
                options: &[
                    "Daily revenue",
                    "User retention over time",
                    "Feature requests",
                    "Bug reports",
                ],
                correct_answer: 1,
                explanation: Some("Cohort analysis tracks how user retention changes over time for different user groups."),
            },
            StaticQuestion {
                id: 30,
                question: "Feature adoption rates measure:",
                options: &[
                    "How fast features are built",
                    "How many users use specific features",
                    "How much features cost",
                    "How bugs are fixed",
                ],
                correct_answer: 1,
                explanation: Some("Feature adoption rates measure what percentage of users are using specific features."),
            },
        ],
    ),
    (
        4,
        &[
            StaticQuestion {
                id: 31,
                question: "In the RICE prioritization framework, what does the 'E' represent?",
                options: &[
                    "Engagement",
                    "Effort",
                    "Execution",
                    "Evaluation",
                ],
                correct_answer: 1,
                explanation: Some("In RICE, 'E' stands for Effort - the amount of work required to implement the feature."),
            },
            StaticQuestion {
                id: 32,
                question: "The RICE score is calculated as:",
                options: &[
                    "(Reach + Impact + Confidence) / Effort",
                    "(Reach × Impact × Confidence) / Effort",
                    "Reach × Impact × Confidence × Effort",
                    "(Reach × Impact) - (Confidence × Effort)",
                ],
                correct_answer: 1,
                explanation: Some("RICE score = (Reach × Impact × Confidence) / Effort."),
            },
            StaticQuestion {
                id: 33,
                question: "In MoSCoW, what does 'Must Have' represent?",
                options: &[
                    "Nice to have features",
                    "Critical features",
                    "Future features",
                    "Optional features",
                ],
                correct_answer: 1,
                explanation: Some("Must Have features are critical and required for the product to function."),
            },
            StaticQuestion {
                id: 34,
                question: "In the Kano Model, 'Basic' features are:",
                options: &[
                    "Exciting new features",
                    "Expected features",
                    "Performance features",
                    "Optional features",
                ],
                correct_answer: 1,
                explanation: Some("Basic features are expected by users - their absence causes dissatisfaction."),
            },
            StaticQuestion {
                id: 35,
                question: "High Value, Low Effort features are called:",
                options: &[
                    "Major Projects",
                    "Quick Wins",
                    "Fill-ins",
                    "Avoid",
                ],
                correct_answer: 1,
                explanation: Some("High Value, Low Effort features are Quick Wins - prioritize these first."),
            },
            StaticQuestion {
                id: 36,
                question: "What should you avoid in the Value vs Effort matrix?",
                options: &[
                    "High Value, High Effort",
                    "Low Value, High Effort",
                    "High Value, Low Effort",
                    "Low Value, Low Effort",
                ],
                correct_answer: 1,
                explanation: Some("Avoid Low Value, High Effort features - they're not worth the investment."),
            },
            StaticQuestion {
                id: 37,
                question: "Excitement features in the Kano Model:",
                options: &[
                    "Are expected by users",
                    "Delight users unexpectedly",
                    "Cause dissatisfaction if missing",
                    "Have linear satisfaction",
                ],
                correct_answer: 1,
                explanation: Some("Excitement features delight users and provide unexpected value beyond basic expectations."),
            },
            StaticQuestion {
                id: 38,
                question: "In RICE, Confidence represents:",
                options: &[
                    "Team morale",
                    "How sure you are about your estimates",
                    "User satisfaction",
                    "Technical feasibility",
                ],
                correct_answer: 1,
                explanation: Some("Confidence represents how sure you are about your Reach and Impact estimates."),
            },
            StaticQuestion {
                id: 39,
                question: "Why involve stakeholders in prioritization?",
                options: &[
                    "To delegate responsibility",
                    "To make trade-offs visible",
                    "To avoid making decisions",
                    "To slow down the process",
                ],
                correct_answer: 1,
                explanation: Some("Involving stakeholders makes trade-offs visible and builds alignment on priorities."),
            },
            StaticQuestion {
                id: 40,
                question: "Performance features in Kano Model have:",
                options: &[
                    "No impact on satisfaction",
                    "Linear satisfaction relationship",
                    "Exponential satisfaction",
                    "Negative satisfaction impact",
                ],
                correct_answer: 1,
                explanation: Some("Performance features have a linear relationship - more is better, up to a point."),
            },
        ],
    ),
];
