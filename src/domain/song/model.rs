use std::fmt;

use chrono::NaiveDate;
use garde::Validate;
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use url::Url;
use utoipa::{IntoParams, ToSchema};

use crate::constant::{
    DEFAULT_SEARCH_LIMIT, MAX_BATCH_LIMIT, MAX_BATCH_OFFSET,
};

/// Natural key of a song at the API boundary.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    IntoParams,
    Validate,
)]
#[into_params(parameter_in = Query)]
pub struct Song {
    #[garde(length(min = 1))]
    pub group: String,
    #[serde(rename = "song")]
    #[garde(length(min = 1))]
    pub song_name: String,
}

impl Song {
    pub fn new(group: impl Into<String>, song_name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            song_name: song_name.into(),
        }
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" by {}", self.song_name, self.group)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SongInfo {
    pub group: String,
    #[serde(rename = "song")]
    pub song_name: String,
    /// Verses joined with a line break, in verse order.
    pub lyrics: String,
    pub release_date: Option<NaiveDate>,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SongSummary {
    pub group: String,
    #[serde(rename = "song")]
    pub song_name: String,
    pub release_date: Option<NaiveDate>,
    pub link: String,
}

/// Partial update of a song.
///
/// A missing key leaves the column untouched. `link` and `releaseDate` also
/// accept an explicit `null`, which clears the column. Verses are always
/// replaced by `lyrics`, so a patch without it leaves the song without verses.
#[derive(Clone, Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SongUpdate {
    #[garde(length(min = 1))]
    pub group: Option<String>,
    #[serde(rename = "song")]
    #[garde(length(min = 1))]
    pub song_name: Option<String>,
    #[garde(skip)]
    pub lyrics: Option<Vec<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, format = Uri)]
    #[garde(custom(http_url))]
    pub link: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, format = Date)]
    #[garde(skip)]
    pub release_date: Option<Option<NaiveDate>>,
}

/// Scalar columns a [`SongUpdate`] can assign, in assignment order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SongField {
    Group,
    SongName,
    Link,
    ReleaseDate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Date(Option<NaiveDate>),
}

impl SongUpdate {
    /// Present scalar fields with their new values. `None` inside a value
    /// means the column is cleared.
    pub fn changes(&self) -> Vec<(SongField, FieldValue<'_>)> {
        let mut changes = Vec::with_capacity(4);

        if let Some(group) = &self.group {
            changes.push((SongField::Group, FieldValue::Text(Some(group))));
        }
        if let Some(song_name) = &self.song_name {
            changes
                .push((SongField::SongName, FieldValue::Text(Some(song_name))));
        }
        if let Some(link) = &self.link {
            changes.push((SongField::Link, FieldValue::Text(link.as_deref())));
        }
        if let Some(release_date) = self.release_date {
            changes
                .push((SongField::ReleaseDate, FieldValue::Date(release_date)));
        }

        changes
    }

    /// The replacement verses, if the patch carries any.
    pub fn verses(&self) -> Option<&[String]> {
        self.lyrics.as_deref().filter(|verses| !verses.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.group.is_none()
            && self.song_name.is_none()
            && self.link.is_none()
            && self.release_date.is_none()
            && self.verses().is_none()
    }

    /// Identity of `current` once this patch is applied.
    pub fn target(&self, current: &Song) -> Song {
        Song {
            group: self.group.clone().unwrap_or_else(|| current.group.clone()),
            song_name: self
                .song_name
                .clone()
                .unwrap_or_else(|| current.song_name.clone()),
        }
    }
}

fn http_url(value: &Option<Option<String>>, _: &()) -> garde::Result {
    let Some(Some(link)) = value else {
        return Ok(());
    };

    match Url::parse(link) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(url) => Err(garde::Error::new(format!(
            "unsupported url scheme: {}",
            url.scheme()
        ))),
        Err(err) => Err(garde::Error::new(format!("not a valid url: {err}"))),
    }
}

/// Offset/limit pagination window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Batch {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Batch {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

const fn default_search_limit() -> u64 {
    DEFAULT_SEARCH_LIMIT
}

/// Search filters. Every filter is optional, empty strings count as absent.
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, Deserialize, ToSchema, IntoParams, Validate,
)]
#[into_params(parameter_in = Query)]
pub struct SongSearch {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[garde(length(min = 1))]
    pub by_group: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[garde(length(min = 1))]
    pub by_song_name: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[garde(length(min = 1))]
    pub by_lyrics: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[garde(length(min = 1))]
    pub by_link: Option<String>,
    /// Inclusive lower bound of the release date
    #[serde(default)]
    #[garde(skip)]
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound of the release date
    #[serde(default)]
    #[garde(skip)]
    pub date_to: Option<NaiveDate>,
    #[serde(default)]
    #[garde(range(max = MAX_BATCH_OFFSET))]
    pub offset: u64,
    #[serde(default = "default_search_limit")]
    #[garde(range(min = 1, max = MAX_BATCH_LIMIT))]
    pub limit: u64,
}

impl Default for SongSearch {
    fn default() -> Self {
        Self {
            by_group: None,
            by_song_name: None,
            by_lyrics: None,
            by_link: None,
            date_from: None,
            date_to: None,
            offset: 0,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SongSearch {
    pub const fn batch(&self) -> Batch {
        Batch {
            offset: self.offset,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn patch(value: serde_json::Value) -> SongUpdate {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_and_null_are_distinct() {
        let absent = patch(json!({}));
        assert_eq!(absent.link, None);
        assert_eq!(absent.release_date, None);

        let cleared = patch(json!({ "link": null, "releaseDate": null }));
        assert_eq!(cleared.link, Some(None));
        assert_eq!(cleared.release_date, Some(None));

        let set = patch(json!({
            "link": "https://muse.mu",
            "releaseDate": "2003-09-15"
        }));
        assert_eq!(set.link, Some(Some("https://muse.mu".to_string())));
        assert_eq!(
            set.release_date,
            Some(NaiveDate::from_ymd_opt(2003, 9, 15))
        );
    }

    #[test]
    fn changes_follow_field_order() {
        let update = patch(json!({
            "releaseDate": "2003-09-15",
            "link": null,
            "song": "Hysteria",
            "group": "Muse"
        }));

        let fields: Vec<_> =
            update.changes().into_iter().map(|(field, _)| field).collect();

        assert_eq!(
            fields,
            [
                SongField::Group,
                SongField::SongName,
                SongField::Link,
                SongField::ReleaseDate
            ]
        );
        assert_eq!(update.changes()[2].1, FieldValue::Text(None));
    }

    #[test]
    fn empty_lyrics_count_as_absent() {
        let update = patch(json!({ "lyrics": [] }));

        assert!(update.verses().is_none());
        assert!(update.is_empty());

        let update = patch(json!({ "lyrics": ["line1"] }));
        assert!(!update.is_empty());
        assert!(update.changes().is_empty());
    }

    #[test]
    fn target_applies_renames() {
        let current = Song::new("Muse", "Hysteria");

        let update = patch(json!({ "song": "Uprising" }));
        assert_eq!(update.target(&current), Song::new("Muse", "Uprising"));

        assert_eq!(SongUpdate::default().target(&current), current);
    }

    #[test]
    fn validate_song_identity() {
        assert!(Song::new("Muse", "Hysteria").validate().is_ok());
        assert!(Song::new("", "Hysteria").validate().is_err());
        assert!(Song::new("Muse", "").validate().is_err());
    }

    #[test]
    fn validate_update_link() {
        assert!(patch(json!({ "link": "https://muse.mu" })).validate().is_ok());
        assert!(patch(json!({ "link": null })).validate().is_ok());
        assert!(patch(json!({ "link": "not a url" })).validate().is_err());
        assert!(patch(json!({ "link": "ftp://muse.mu" })).validate().is_err());
        assert!(patch(json!({ "group": "" })).validate().is_err());
    }

    #[test]
    fn search_treats_empty_strings_as_absent() {
        let search: SongSearch = serde_json::from_value(json!({
            "by_group": "",
            "by_lyrics": "love"
        }))
        .unwrap();

        assert_eq!(search.by_group, None);
        assert_eq!(search.by_lyrics.as_deref(), Some("love"));
        assert_eq!(search.batch(), Batch::default());
        assert!(search.validate().is_ok());
    }

    #[test]
    fn search_limit_is_bounded() {
        let search = SongSearch {
            limit: 0,
            ..Default::default()
        };
        assert!(search.validate().is_err());

        let search = SongSearch {
            limit: MAX_BATCH_LIMIT + 1,
            ..Default::default()
        };
        assert!(search.validate().is_err());
    }

    #[test]
    fn search_offset_fits_a_bigint() {
        let search = SongSearch {
            offset: MAX_BATCH_OFFSET,
            ..Default::default()
        };
        assert!(search.validate().is_ok());

        let search = SongSearch {
            offset: MAX_BATCH_OFFSET + 1,
            ..Default::default()
        };
        assert!(search.validate().is_err());
    }
}
