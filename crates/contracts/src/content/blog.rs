use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format of `BlogPost::date`
pub const BLOG_DATE_FORMAT: &str = "%Y-%m-%d";

/// Article teaser listed on the blog page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    /// ISO date, `YYYY-MM-DD`
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub author: String,
}

impl BlogPost {
    pub fn href(&self) -> String {
        format!("/blog/{}", self.id)
    }

    /// Calendar date of the post, `None` if `date` is not a real `YYYY-MM-DD` day
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, BLOG_DATE_FORMAT).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(date: &str) -> BlogPost {
        BlogPost {
            id: 7,
            title: "t".into(),
            excerpt: "e".into(),
            date: date.into(),
            read_time: "5 min read".into(),
            category: "c".into(),
            author: "a".into(),
        }
    }

    #[test]
    fn test_published_on() {
        assert_eq!(
            post("2024-01-15").published_on(),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(post("2024-13-45").published_on(), None);
        assert_eq!(post("2023-02-29").published_on(), None);
        assert_eq!(post("15/01/2024").published_on(), None);
        assert_eq!(post("7").href(), "/blog/7");
    }
}
