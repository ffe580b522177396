//! First-run data generation.

use std::collections::HashSet;

use chrono::{Duration, Utc};
use learnpath_core::{
    Link, Module, ModuleId, Roadmap, RoadmapId, Role, Settings, Time, Topic, TopicId, TopicStatus,
    User, UserId, UserProgress,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::catalog::{self, ModuleTemplate, SampleLink, TopicTemplate};
use crate::SeedError;

/// Mask for the 80 random bits of a ULID.
const RANDOM_MASK: u128 = (1 << 80) - 1;

/// A freshly generated roadmap, user and matching progress overlay.
#[derive(Debug, Clone)]
pub struct Seed {
    /// The curriculum
    pub roadmap: Roadmap,
    /// The guest user
    pub user: User,
    /// Overlay derived from the topics' intrinsic statuses
    pub user_progress: UserProgress,
}

/// Something that can produce first-run data.
pub trait Seeder {
    /// Generate a complete seed.
    fn generate(&mut self) -> Result<Seed, SeedError>;
}

/// Configuration for the seed generator.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Fixed generation time; the wall clock when `None`
    pub now: Option<Time>,
    /// Topic creation dates fall within this many days before `now`
    pub history_days: i64,
    /// Probability that a topic starts `Completed`
    pub completed_ratio: f64,
    /// Probability that a topic starts `Now`
    pub in_progress_ratio: f64,
    /// Inclusive range of estimated hours per topic
    pub hours: (u32, u32),
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            now: None,
            history_days: 365,
            completed_ratio: 0.3,
            in_progress_ratio: 0.2,
            hours: (1, 8),
        }
    }
}

/// Generates the curated roadmap with randomized statuses, efforts and dates.
pub struct SeedGenerator<R: Rng> {
    rng: R,
    config: SeedConfig,
    issued: HashSet<u128>,
}

impl SeedGenerator<StdRng> {
    /// Create a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Create a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SeedGenerator<R> {
    /// Create a generator over the given random source.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: SeedConfig::default(),
            issued: HashSet::new(),
        }
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: SeedConfig) -> Self {
        self.config = config;
        self
    }

    fn now(&self) -> Time {
        self.config.now.unwrap_or_else(Utc::now)
    }

    /// Generate the roadmap only.
    pub fn generate_roadmap(&mut self, now: Time) -> Result<Roadmap, SeedError> {
        let modules = catalog::CURRICULUM
            .iter()
            .map(|template| self.module(template, now))
            .collect::<Result<Vec<_>, _>>()?;

        let (ts, random) = self.next_parts(now);
        let roadmap = Roadmap::new(
            RoadmapId::from_parts(ts, random),
            catalog::ROADMAP_TITLE,
            catalog::ROADMAP_VERSION,
            now - Duration::days(365),
        )?
        .with_description(catalog::ROADMAP_DESCRIPTION)
        .with_modules(modules)
        .with_updated_at(now - Duration::days(1));

        roadmap.validate()?;
        Ok(roadmap)
    }

    /// Generate the guest user.
    pub fn generate_user(&mut self, now: Time) -> Result<User, SeedError> {
        let (ts, random) = self.next_parts(now);
        let user = User::new(
            UserId::from_parts(ts, random),
            "Guest Student",
            "guest@example.com",
            Role::Student,
            now - Duration::days(30),
        )?
        .with_avatar("https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=400");
        Ok(user)
    }

    fn module(&mut self, template: &ModuleTemplate, now: Time) -> Result<Module, SeedError> {
        let topics = template
            .topics
            .iter()
            .map(|t| self.topic(t, now))
            .collect::<Result<Vec<_>, _>>()?;
        let sub_modules = template
            .sub_modules
            .iter()
            .map(|m| self.module(m, now))
            .collect::<Result<Vec<_>, _>>()?;

        let pool = catalog::links_in(template.link_pools);
        let links = self.pick_links(&pool, template.link_count)?;

        let (ts, random) = self.next_parts(now);
        let module = Module::new(
            ModuleId::from_parts(ts, random),
            template.title,
            now - Duration::days(template.age_days),
        )?
        .with_text(template.description, template.summary)
        .with_topics(topics)
        .with_sub_modules(sub_modules)
        .with_links(links);
        Ok(module)
    }

    fn topic(&mut self, template: &TopicTemplate, now: Time) -> Result<Topic, SeedError> {
        let status = self.status();
        let (low, high) = self.config.hours;
        let hours = self.rng.gen_range(low..=high.max(low));
        let age = self.rng.gen_range(0..self.config.history_days.max(1));

        let mut links = Vec::new();
        let docs_count = self.rng.gen_range(1..=2);
        let github_count = self.rng.gen_range(0..=1);
        let tutorial_count = self.rng.gen_range(0..=1);
        links.extend(self.pick_links(&catalog::links_in(&[learnpath_core::LinkCategory::Docs]), docs_count)?);
        links.extend(self.pick_links(&catalog::links_in(&[learnpath_core::LinkCategory::Github]), github_count)?);
        links.extend(self.pick_links(&catalog::links_in(&[learnpath_core::LinkCategory::Tutorial]), tutorial_count)?);

        let (ts, random) = self.next_parts(now);
        let topic = Topic::new(TopicId::from_parts(ts, random), template.title, now - Duration::days(age))?
            .with_description(format!(
                "Master {} concepts and apply them effectively in real-world projects.",
                template.title.to_lowercase()
            ))
            .with_keywords(template.keywords.iter().copied())
            .with_status(status)
            .with_hours(hours)
            .with_links(links);
        Ok(topic)
    }

    fn status(&mut self) -> TopicStatus {
        let roll: f64 = self.rng.gen();
        if roll < self.config.completed_ratio {
            TopicStatus::Completed
        } else if roll < self.config.completed_ratio + self.config.in_progress_ratio {
            TopicStatus::Now
        } else {
            TopicStatus::Future
        }
    }

    fn pick_links(&mut self, pool: &[&SampleLink], count: usize) -> Result<Vec<Link>, SeedError> {
        pool.choose_multiple(&mut self.rng, count)
            .map(|l| Link::new(l.title, l.url, l.category).map_err(SeedError::from))
            .collect()
    }

    /// ULID parts whose random half has not been issued by this generator.
    fn next_parts(&mut self, now: Time) -> (u64, u128) {
        let ts = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        loop {
            let random = self.rng.gen::<u128>() & RANDOM_MASK;
            if self.issued.insert(random) {
                return (ts, random);
            }
        }
    }
}

impl<R: Rng> Seeder for SeedGenerator<R> {
    fn generate(&mut self) -> Result<Seed, SeedError> {
        let now = self.now();
        let roadmap = self.generate_roadmap(now)?;
        let user = self.generate_user(now)?;
        let user_progress = UserProgress::from_roadmap(&roadmap, user.id.clone(), Settings::default(), now);

        debug!(
            "Generated roadmap {} with {} modules and {} topics",
            roadmap.id,
            roadmap.all_modules().len(),
            user_progress.topic_statuses.len()
        );

        Ok(Seed {
            roadmap,
            user,
            user_progress,
        })
    }
}
