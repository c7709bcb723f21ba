use crate::shared::date_utils::format_long_date;
use contracts::content::{BlogPost, ContentStore};

/// Post teaser with its display date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub post: BlogPost,
    /// "January 15, 2024", or the raw date if it does not parse
    pub date_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogModel {
    pub posts: Vec<PostCard>,
}

pub fn build(store: &ContentStore) -> BlogModel {
    BlogModel {
        posts: store
            .blog_posts()
            .iter()
            .map(|post| PostCard {
                date_label: format_long_date(&post.date),
                post: post.clone(),
            })
            .collect(),
    }
}
