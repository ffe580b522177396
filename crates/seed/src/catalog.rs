//! The curated curriculum used for first-run data.
//!
//! Only the shape matters to the rest of the system; the content is
//! illustrative.

use learnpath_core::LinkCategory;

/// A topic to generate.
#[derive(Debug, Clone, Copy)]
pub struct TopicTemplate {
    /// Topic title
    pub title: &'static str,
    /// Search keywords
    pub keywords: &'static [&'static str],
}

/// A module to generate, possibly with nested modules.
#[derive(Debug, Clone, Copy)]
pub struct ModuleTemplate {
    /// Module title
    pub title: &'static str,
    /// Short description
    pub description: &'static str,
    /// Longer summary
    pub summary: &'static str,
    /// How many days before generation the module was created
    pub age_days: i64,
    /// Directly owned topics
    pub topics: &'static [TopicTemplate],
    /// Child modules
    pub sub_modules: &'static [ModuleTemplate],
    /// Link categories the module's links are drawn from
    pub link_pools: &'static [LinkCategory],
    /// Number of module links
    pub link_count: usize,
}

/// A reference link in the sample pool.
#[derive(Debug, Clone, Copy)]
pub struct SampleLink {
    /// Display title
    pub title: &'static str,
    /// Target URL
    pub url: &'static str,
    /// Category
    pub category: LinkCategory,
}

/// Title of the generated roadmap.
pub const ROADMAP_TITLE: &str = "Full-Stack Web Development Roadmap";

/// Description of the generated roadmap.
pub const ROADMAP_DESCRIPTION: &str =
    "A comprehensive learning path from beginner to advanced web developer";

/// Curriculum version of the generated roadmap.
pub const ROADMAP_VERSION: &str = "2.0.0";

/// Pool of reference links.
pub static SAMPLE_LINKS: &[SampleLink] = &[
    SampleLink { title: "MDN Web Docs", url: "https://developer.mozilla.org", category: LinkCategory::Docs },
    SampleLink { title: "W3C Specification", url: "https://www.w3.org", category: LinkCategory::Docs },
    SampleLink { title: "React Documentation", url: "https://react.dev", category: LinkCategory::Docs },
    SampleLink { title: "TypeScript Handbook", url: "https://www.typescriptlang.org/docs", category: LinkCategory::Docs },
    SampleLink { title: "Awesome List", url: "https://github.com/sindresorhus/awesome", category: LinkCategory::Github },
    SampleLink { title: "Practice Repository", url: "https://github.com/example/practice", category: LinkCategory::Github },
    SampleLink { title: "Code Examples", url: "https://github.com/example/examples", category: LinkCategory::Github },
    SampleLink { title: "FreeCodeCamp Tutorial", url: "https://www.freecodecamp.org", category: LinkCategory::Tutorial },
    SampleLink { title: "Tutorial Series", url: "https://example.com/tutorial", category: LinkCategory::Tutorial },
];

const fn topic(title: &'static str, keywords: &'static [&'static str]) -> TopicTemplate {
    TopicTemplate { title, keywords }
}

const DOCS: &[LinkCategory] = &[LinkCategory::Docs];
const DOCS_GITHUB: &[LinkCategory] = &[LinkCategory::Docs, LinkCategory::Github];
const DOCS_TUTORIAL: &[LinkCategory] = &[LinkCategory::Docs, LinkCategory::Tutorial];
const TUTORIAL: &[LinkCategory] = &[LinkCategory::Tutorial];

/// Top-level modules, in display order.
pub static CURRICULUM: &[ModuleTemplate] = &[
    ModuleTemplate {
        title: "Foundation",
        description: "Essential programming and development fundamentals",
        summary: "Build a strong foundation with core computer science concepts, development tools, and industry practices.",
        age_days: 300,
        topics: &[
            topic("Computer Science Fundamentals", &["algorithms", "data structures", "complexity", "problem solving"]),
            topic("Internet & Web Basics", &["http", "dns", "browsers", "servers", "protocols"]),
            topic("Development Environment", &["terminal", "git", "editors", "debugging", "workflow"]),
            topic("Version Control with Git", &["git", "github", "branching", "merging", "collaboration"]),
            topic("Command Line Fundamentals", &["bash", "shell", "commands", "scripting", "automation"]),
            topic("Software Development Lifecycle", &["planning", "design", "testing", "deployment", "maintenance"]),
        ],
        sub_modules: &[],
        link_pools: DOCS_TUTORIAL,
        link_count: 3,
    },
    ModuleTemplate {
        title: "HTML",
        description: "HyperText Markup Language - the foundation of web content",
        summary: "Master HTML5 semantic markup, accessibility standards, and modern content structure.",
        age_days: 280,
        topics: &[
            topic("HTML Fundamentals", &["tags", "attributes", "elements", "syntax", "structure"]),
            topic("Media Elements", &["img", "video", "audio", "canvas", "svg"]),
        ],
        sub_modules: &[
            ModuleTemplate {
                title: "Semantic HTML",
                description: "Modern HTML5 semantic elements",
                summary: "Write meaningful, accessible HTML using semantic elements.",
                age_days: 250,
                topics: &[
                    topic("Document Structure", &["html5", "doctype", "head", "body", "metadata"]),
                    topic("Semantic Elements", &["header", "nav", "main", "article", "section", "aside"]),
                    topic("Forms & Validation", &["form", "input", "validation", "accessibility", "ux"]),
                ],
                sub_modules: &[],
                link_pools: &[],
                link_count: 0,
            },
            ModuleTemplate {
                title: "Accessibility",
                description: "Web accessibility standards and implementation",
                summary: "Implement WCAG guidelines for inclusive web experiences.",
                age_days: 240,
                topics: &[
                    topic("ARIA & Screen Readers", &["aria", "roles", "labels", "screen readers", "assistive tech"]),
                    topic("Keyboard Navigation", &["tabindex", "focus", "keyboard", "navigation", "usability"]),
                ],
                sub_modules: &[],
                link_pools: &[],
                link_count: 0,
            },
        ],
        link_pools: DOCS,
        link_count: 2,
    },
    ModuleTemplate {
        title: "CSS",
        description: "Cascading Style Sheets - styling and layout for the web",
        summary: "Learn modern CSS including Grid, Flexbox, animations, and responsive design.",
        age_days: 260,
        topics: &[
            topic("CSS Fundamentals", &["selectors", "cascade", "specificity", "inheritance", "box-model"]),
            topic("Responsive Design", &["media-queries", "mobile-first", "breakpoints", "fluid-layouts", "viewport"]),
            topic("CSS Preprocessors", &["sass", "less", "variables", "nesting", "mixins"]),
        ],
        sub_modules: &[
            ModuleTemplate {
                title: "Layout Systems",
                description: "Modern CSS layout techniques",
                summary: "Master CSS Grid, Flexbox, and positioning for complex layouts.",
                age_days: 220,
                topics: &[
                    topic("CSS Grid", &["grid", "fr-unit", "grid-areas", "auto-placement", "responsive"]),
                    topic("Flexbox", &["flex", "alignment", "distribution", "direction", "wrap"]),
                    topic("Positioning", &["static", "relative", "absolute", "fixed", "sticky"]),
                ],
                sub_modules: &[],
                link_pools: &[],
                link_count: 0,
            },
            ModuleTemplate {
                title: "Advanced Styling",
                description: "Visual design and interactive effects",
                summary: "Create polished, animated interfaces with advanced CSS.",
                age_days: 210,
                topics: &[
                    topic("Colors & Typography", &["color-theory", "fonts", "hierarchy", "contrast", "readability"]),
                    topic("Animations & Transitions", &["keyframes", "transitions", "transforms", "performance", "easing"]),
                ],
                sub_modules: &[],
                link_pools: &[],
                link_count: 0,
            },
        ],
        link_pools: DOCS_GITHUB,
        link_count: 3,
    },
    ModuleTemplate {
        title: "JavaScript",
        description: "The programming language of the web",
        summary: "JavaScript from the basics to async programming and DOM manipulation.",
        age_days: 240,
        topics: &[],
        sub_modules: &[
            ModuleTemplate {
                title: "Core JavaScript",
                description: "Fundamental JavaScript language concepts",
                summary: "Functions, objects, and modern language features.",
                age_days: 200,
                topics: &[
                    topic("Variables & Data Types", &["let", "const", "var", "primitives", "objects", "arrays"]),
                    topic("Functions & Scope", &["functions", "arrow-functions", "closures", "scope", "hoisting"]),
                    topic("Objects & Prototypes", &["objects", "prototypes", "inheritance", "classes", "constructors"]),
                ],
                sub_modules: &[],
                link_pools: &[],
                link_count: 0,
            },
            ModuleTemplate {
                title: "Asynchronous JavaScript",
                description: "Handling async operations and API communication",
                summary: "Promises, async/await, and API integration patterns.",
                age_days: 190,
                topics: &[
                    topic("Promises & Async/Await", &["promises", "async-await", "error-handling", "chaining"]),
                    topic("Fetch API & HTTP", &["fetch", "rest-api", "json", "cors", "authentication"]),
                ],
                sub_modules: &[],
                link_pools: &[],
                link_count: 0,
            },
            ModuleTemplate {
                title: "DOM & Browser APIs",
                description: "Client-side JavaScript and browser interaction",
                summary: "Manipulate the DOM, handle events, and use browser APIs.",
                age_days: 180,
                topics: &[
                    topic("DOM Manipulation", &["selectors", "events", "dynamic-content", "performance"]),
                    topic("Event Handling", &["event-listeners", "delegation", "propagation", "prevention"]),
                ],
                sub_modules: &[],
                link_pools: &[],
                link_count: 0,
            },
        ],
        link_pools: DOCS_TUTORIAL,
        link_count: 4,
    },
    ModuleTemplate {
        title: "React",
        description: "A JavaScript library for building user interfaces",
        summary: "React from components and hooks to advanced patterns and ecosystem tools.",
        age_days: 200,
        topics: &[],
        sub_modules: &[
            ModuleTemplate {
                title: "React Fundamentals",
                description: "Core React concepts and patterns",
                summary: "Components, hooks, and state management fundamentals.",
                age_days: 160,
                topics: &[
                    topic("Components & JSX", &["components", "jsx", "props", "composition", "reusability"]),
                    topic("State Management", &["useState", "useReducer", "state-updates", "immutability"]),
                    topic("Effects & Lifecycle", &["useEffect", "lifecycle", "cleanup", "dependencies", "optimization"]),
                ],
                sub_modules: &[],
                link_pools: &[],
                link_count: 0,
            },
            ModuleTemplate {
                title: "Advanced React",
                description: "Performance optimization and advanced patterns",
                summary: "Advanced patterns, optimization techniques, and custom hooks.",
                age_days: 150,
                topics: &[
                    topic("Context & Global State", &["context", "providers", "global-state", "prop-drilling"]),
                    topic("Performance Optimization", &["memo", "useMemo", "useCallback", "profiling", "lazy-loading"]),
                    topic("Custom Hooks", &["custom-hooks", "reusable-logic", "abstraction", "testing"]),
                ],
                sub_modules: &[],
                link_pools: &[],
                link_count: 0,
            },
            ModuleTemplate {
                title: "React Ecosystem",
                description: "Router, state management, and tooling",
                summary: "Routing, state management libraries, and the wider ecosystem.",
                age_days: 140,
                topics: &[
                    topic("React Router", &["routing", "navigation", "parameters", "guards", "lazy-routes"]),
                    topic("State Management Libraries", &["redux", "zustand", "context", "patterns"]),
                ],
                sub_modules: &[],
                link_pools: &[],
                link_count: 0,
            },
        ],
        link_pools: DOCS_GITHUB,
        link_count: 3,
    },
    ModuleTemplate {
        title: "Development Tooling",
        description: "Modern development tools and build processes",
        summary: "Professional workflows with modern tooling, build processes, and automation.",
        age_days: 120,
        topics: &[
            topic("Module Bundlers", &["webpack", "vite", "rollup", "bundling", "optimization"]),
            topic("Package Management", &["npm", "yarn", "pnpm", "dependencies", "semver"]),
            topic("Linting & Formatting", &["eslint", "prettier", "code-quality", "standards", "automation"]),
            topic("Build Tools & Scripts", &["build-process", "scripts", "automation", "ci-cd", "deployment"]),
            topic("Development Servers", &["hot-reload", "dev-servers", "proxy", "debugging", "local-development"]),
            topic("Environment Configuration", &["env-variables", "config", "environments", "secrets", "deployment"]),
        ],
        sub_modules: &[],
        link_pools: DOCS_GITHUB,
        link_count: 2,
    },
    ModuleTemplate {
        title: "Testing",
        description: "Testing strategies and frameworks",
        summary: "Unit, integration, and end-to-end testing strategies.",
        age_days: 100,
        topics: &[
            topic("Unit Testing", &["jest", "vitest", "unit-tests", "mocking", "assertions"]),
            topic("Integration Testing", &["integration-tests", "api-testing", "database", "end-to-end"]),
            topic("Component Testing", &["testing-library", "component-tests", "user-interactions", "accessibility"]),
            topic("Test-Driven Development", &["tdd", "red-green-refactor", "design", "quality"]),
            topic("Performance Testing", &["performance", "load-testing", "metrics", "optimization", "monitoring"]),
        ],
        sub_modules: &[],
        link_pools: TUTORIAL,
        link_count: 2,
    },
    ModuleTemplate {
        title: "Deployment & DevOps",
        description: "Deploying and maintaining web applications",
        summary: "Deploy, monitor, and maintain applications on modern cloud platforms.",
        age_days: 80,
        topics: &[
            topic("Cloud Platforms", &["aws", "vercel", "netlify", "heroku", "cloud-deployment"]),
            topic("CI/CD Pipelines", &["github-actions", "ci-cd", "automation", "testing", "deployment"]),
            topic("Domain & DNS", &["domains", "dns", "ssl", "certificates", "custom-domains"]),
            topic("Performance Monitoring", &["analytics", "monitoring", "performance", "errors", "optimization"]),
            topic("Security Best Practices", &["https", "cors", "csp", "authentication", "vulnerabilities"]),
            topic("Containerization", &["docker", "containers", "images", "orchestration", "production"]),
        ],
        sub_modules: &[],
        link_pools: DOCS_GITHUB,
        link_count: 3,
    },
    ModuleTemplate {
        title: "Advanced Topics",
        description: "Cutting-edge web development concepts",
        summary: "TypeScript, performance, PWAs, and modern architecture patterns.",
        age_days: 60,
        topics: &[
            topic("TypeScript", &["typescript", "types", "interfaces", "generics", "type-safety"]),
            topic("Web Performance", &["performance", "optimization", "core-web-vitals", "caching", "lazy-loading"]),
            topic("PWA Development", &["pwa", "service-workers", "offline", "web-app-manifest", "push-notifications"]),
            topic("Web Security", &["owasp", "xss", "csrf", "security-headers", "authentication"]),
            topic("Micro-frontends", &["micro-frontends", "module-federation", "architecture", "scalability"]),
        ],
        sub_modules: &[],
        link_pools: DOCS_TUTORIAL,
        link_count: 3,
    },
];

/// Links in the pool with one of the given categories.
pub fn links_in(categories: &[LinkCategory]) -> Vec<&'static SampleLink> {
    SAMPLE_LINKS
        .iter()
        .filter(|l| categories.contains(&l.category))
        .collect()
}

/// Number of topics in a template subtree.
pub fn topic_count(template: &ModuleTemplate) -> usize {
    template.topics.len() + template.sub_modules.iter().map(topic_count).sum::<usize>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curriculum_shape() {
        assert_eq!(CURRICULUM.len(), 9);
        assert_eq!(CURRICULUM.iter().map(topic_count).sum::<usize>(), 58);
        assert!(CURRICULUM.iter().any(|m| !m.sub_modules.is_empty()));
    }

    #[test]
    fn test_link_pools_cover_requested_counts() {
        for module in CURRICULUM {
            assert!(links_in(module.link_pools).len() >= module.link_count, "{}", module.title);
        }
    }
}
