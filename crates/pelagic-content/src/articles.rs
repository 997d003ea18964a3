//! Article index fixtures.

use crate::record::{Metric, Record};

/// Category tokens for the article filter bar, `all` sentinel first.
pub const CATEGORY_TOKENS: &[&str] = &[
    "all",
    "technology",
    "sustainability",
    "compliance",
    "industry",
    "transparency",
];

/// One article in the insights index.
#[derive(Debug, Clone, Copy)]
pub struct Article {
    pub slug: &'static str,
    pub headline: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    pub published: &'static str,
    pub featured: bool,
}

impl Record for Article {
    fn id(&self) -> &'static str {
        self.slug
    }
    fn title(&self) -> &'static str {
        self.headline
    }
    fn category(&self) -> &'static str {
        self.category
    }
    fn body(&self) -> &'static str {
        self.excerpt
    }
    fn metrics(&self) -> &'static [Metric] {
        &[]
    }
}

/// Article index, newest first.
pub static ARTICLES: [Article; 6] = [
    Article {
        slug: "ai-autonomous-systems",
        headline: "Revolutionizing Deep-Sea Mining with AI-Powered Autonomous Systems",
        excerpt: "How the Luna AUV fleet is transforming ocean mining through advanced machine \
            learning and real-time environmental monitoring.",
        category: "technology",
        read_time: "8 min read",
        published: "2024-01-15",
        featured: true,
    },
    Article {
        slug: "environmental-impact-year-one",
        headline: "Environmental Impact Assessment: One Year of Sustainable Ocean Mining",
        excerpt: "Comprehensive analysis of monitoring data showing a 95% reduction in \
            ecosystem impact compared to traditional mining methods.",
        category: "sustainability",
        read_time: "6 min read",
        published: "2024-01-10",
        featured: false,
    },
    Article {
        slug: "deepseaguard-in-action",
        headline: "DeepSeaGuard: Real-Time Compliance Monitoring in Action",
        excerpt: "Behind the scenes of the compliance dashboard that keeps operations within \
            ISA regulations and environmental protection standards.",
        category: "compliance",
        read_time: "5 min read",
        published: "2024-01-08",
        featured: false,
    },
    Article {
        slug: "critical-mineral-supply",
        headline: "The Future of Critical Mineral Supply: Ocean Mining's Role",
        excerpt: "How sustainable ocean mining can meet growing demand for critical minerals \
            while protecting marine ecosystems.",
        category: "industry",
        read_time: "7 min read",
        published: "2024-01-05",
        featured: false,
    },
    Article {
        slug: "crabbots-precision-collection",
        headline: "CrabBots: Precision Nodule Collection Technology",
        excerpt: "A deep dive into autonomous nodule collectors and the precision harvesting \
            that minimizes environmental impact.",
        category: "technology",
        read_time: "4 min read",
        published: "2024-01-03",
        featured: false,
    },
    Article {
        slug: "transparency-public-data",
        headline: "Transparency in Ocean Mining: Public Data Access and Reporting",
        excerpt: "Leading the industry in transparency with public access to real-time \
            operational and environmental data.",
        category: "transparency",
        read_time: "6 min read",
        published: "2024-01-01",
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ALL_TOKEN;

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<_> = ARTICLES.iter().map(|a| a.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), ARTICLES.len());
    }

    #[test]
    fn categories_are_declared_tokens() {
        for article in &ARTICLES {
            assert!(
                CATEGORY_TOKENS.contains(&article.category),
                "undeclared category {}",
                article.category
            );
        }
    }

    #[test]
    fn all_sentinel_leads_the_token_list() {
        assert_eq!(CATEGORY_TOKENS[0], ALL_TOKEN);
    }

    #[test]
    fn exactly_one_featured_article() {
        assert_eq!(ARTICLES.iter().filter(|a| a.featured).count(), 1);
    }
}
