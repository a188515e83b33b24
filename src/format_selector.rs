//! Deduplication and ranking of the formats reported by the extractor.
//!
//! Every `(quality, type)` group keeps a single encoding: the first one seen unless a later one has a
//! strictly higher frame rate (video) or bitrate (audio). The result lists video formats first, each
//! group sorted by the digits of its quality field in descending order, so `"1920x1080"` ranks as
//! `19201080`. Portrait resolutions may therefore sort above wider landscape ones.

use crate::models::{DisplayFormat, FormatKind, GroupKey, RawFormat};

use std::{cmp::Ordering, collections::HashMap};
use tracing::{event, Level};

/// Digits of a value read as an unbounded non-negative integer.
#[derive(Debug, PartialEq, Eq)]
struct DigitsKey(String);

impl DigitsKey {
    fn new(value: &str) -> Self {
        let digits = value.chars().filter(char::is_ascii_digit).skip_while(|ch| *ch == '0').collect();
        Self(digits)
    }
}

impl Ord for DigitsKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.len().cmp(&other.0.len()).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for DigitsKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn best_per_group<'a>(formats: impl IntoIterator<Item = &'a RawFormat>) -> Vec<&'a RawFormat> {
    let mut positions: HashMap<GroupKey, usize> = HashMap::new();
    let mut selected: Vec<&RawFormat> = Vec::new();

    for format in formats {
        let key = format.group_key();

        if let Some(&position) = positions.get(&key) {
            if format.rank() > selected[position].rank() {
                event!(
                    Level::TRACE,
                    %key,
                    replaced = %selected[position].format_id,
                    by = %format.format_id,
                    "Better encoding found"
                );
                selected[position] = format;
            }
        } else {
            positions.insert(key, selected.len());
            selected.push(format);
        }
    }

    selected
}

fn sort_descending_by_digits(formats: &mut [DisplayFormat], quality: impl Fn(&DisplayFormat) -> String) {
    formats.sort_by_cached_key(|format| std::cmp::Reverse(DigitsKey::new(&quality(format))));
}

/// Filters, deduplicates and ranks raw formats into the list shown to clients.
#[must_use]
pub fn select(formats: &[RawFormat]) -> Vec<DisplayFormat> {
    let supported = formats.iter().filter(|format| format.is_supported_extension());

    let (mut video, mut audio): (Vec<DisplayFormat>, Vec<DisplayFormat>) = best_per_group(supported)
        .into_iter()
        .map(DisplayFormat::from)
        .partition(|format| format.kind == FormatKind::Video);

    sort_descending_by_digits(&mut video, |format| format.resolution.clone());
    sort_descending_by_digits(&mut audio, |format| format.abr.to_string());

    event!(
        Level::DEBUG,
        raw = formats.len(),
        video = video.len(),
        audio = audio.len(),
        "Formats selected"
    );

    video.extend(audio);
    video
}
