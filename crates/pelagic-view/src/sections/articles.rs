//! Articles and insights index.

use pelagic_content::articles::{ARTICLES, Article, CATEGORY_TOKENS};
use pelagic_content::record::Record;
use pelagic_state::{Catalog, SelectMode, Selection};

use crate::compose::SectionComposer;
use crate::node::ViewNode;

/// The article index: a category filter bar, the featured article hoisted
/// above the grid, and a reader selection.
#[derive(Debug)]
pub struct ArticlesSection {
    catalog: Catalog<Article>,
    selection: Selection,
}

impl ArticlesSection {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(&ARTICLES, CATEGORY_TOKENS),
            selection: Selection::new(SelectMode::Replace),
        }
    }

    /// Switch the category filter.
    ///
    /// # Panics
    ///
    /// Panics on a token outside the declared category set.
    pub fn set_filter(&mut self, token: &str) {
        self.catalog.set_filter(token);
    }

    pub fn active_filter(&self) -> &'static str {
        self.catalog.active_filter()
    }

    /// Open an article in the reader.
    ///
    /// # Panics
    ///
    /// Panics if `slug` is not an index slug.
    pub fn select(&mut self, slug: &str) {
        self.selection.select(slug, &self.catalog);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected(&self) -> Option<&'static Article> {
        self.selection.resolve(&self.catalog)
    }

    fn article_card(&self, article: &'static Article) -> ViewNode {
        let mut children = vec![
            ViewNode::Badge {
                label: article.category.to_owned(),
                tone: article.category,
            },
            ViewNode::text(article.excerpt),
            ViewNode::Text(format!("{} \u{b7} {}", article.published, article.read_time)),
        ];
        if article.featured {
            children.insert(
                0,
                ViewNode::Badge {
                    label: "Featured".to_owned(),
                    tone: "featured",
                },
            );
        }
        ViewNode::Card {
            id: article.id(),
            title: article.headline.to_owned(),
            selected: self.selection.is_selected(article.id()),
            children,
        }
    }
}

impl Default for ArticlesSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionComposer for ArticlesSection {
    fn anchor(&self) -> &'static str {
        "articles"
    }

    fn title(&self) -> &'static str {
        "Articles & Insights"
    }

    fn build(&self) -> ViewNode {
        let visible = self.catalog.visible();
        let mut children = vec![ViewNode::FilterBar {
            tokens: self.catalog.tokens(),
            active: self.catalog.active_filter(),
        }];
        // Featured first, then the rest in index order.
        let (featured, rest): (Vec<_>, Vec<_>) =
            visible.into_iter().partition(|a| a.featured);
        children.extend(featured.iter().copied().map(|a| self.article_card(a)));
        children.extend(rest.iter().copied().map(|a| self.article_card(a)));
        if let Some(article) = self.selected() {
            children.push(ViewNode::Modal {
                title: article.headline.to_owned(),
                children: vec![
                    ViewNode::text(article.excerpt),
                    ViewNode::Text(format!(
                        "{} \u{b7} {}",
                        article.published, article.read_time
                    )),
                ],
            });
        }
        ViewNode::Section {
            anchor: self.anchor(),
            title: self.title(),
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_article_leads_the_grid() {
        let tree = ArticlesSection::new().build();
        let ids = tree.card_ids();
        assert_eq!(ids.len(), ARTICLES.len());
        assert_eq!(ids[0], "ai-autonomous-systems");
    }

    #[test]
    fn category_filter_narrows_the_index() {
        let mut section = ArticlesSection::new();
        section.set_filter("compliance");
        let ids = section.build().card_ids();
        assert_eq!(ids, vec!["deepseaguard-in-action"]);
    }

    #[test]
    fn reader_modal_opens_and_closes() {
        let mut section = ArticlesSection::new();
        section.select("critical-mineral-supply");
        assert_eq!(
            section.build().count(|n| matches!(n, ViewNode::Modal { .. })),
            1
        );
        section.clear_selection();
        assert_eq!(
            section.build().count(|n| matches!(n, ViewNode::Modal { .. })),
            0
        );
    }
}
