/// A named skill and the lower-case keyword variants that count as evidence for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillDefinition {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// The fixed skill taxonomy, in report order.
///
/// Matching is raw substring containment, so short variants such as "ts" also
/// match inside unrelated words.
pub const SKILL_TAXONOMY: &[SkillDefinition] = &[
    SkillDefinition {
        name: "React",
        keywords: &["react", "reactjs", "react.js", "jsx", "redux", "next.js"],
    },
    SkillDefinition {
        name: "Node.js",
        keywords: &["node", "nodejs", "node.js", "express", "npm"],
    },
    SkillDefinition {
        name: "TypeScript",
        keywords: &["typescript", "ts", "type-safe"],
    },
    SkillDefinition {
        name: "System Design",
        keywords: &[
            "system design",
            "architecture",
            "scalability",
            "microservices",
            "distributed",
            "load balancing",
        ],
    },
    SkillDefinition {
        name: "Cloud/AWS",
        keywords: &["aws", "cloud", "ec2", "s3", "lambda", "azure", "gcp", "docker", "kubernetes"],
    },
    SkillDefinition {
        name: "Database",
        keywords: &["sql", "database", "mongodb", "postgres", "mysql", "redis", "nosql"],
    },
    SkillDefinition {
        name: "Communication",
        keywords: &[
            "communication",
            "team",
            "leadership",
            "collaborat",
            "presentation",
            "mentor",
        ],
    },
];
