//! Parsing for the DIDL-Lite metadata documents speakers embed in
//! `TrackMetaData` elements and ContentDirectory `Browse` results.

use xmltree::Element;

use crate::error::{Result, SocoError};
use crate::model::Track;

/// Parse the metadata for a single track, as found in the `TrackMetaData`
/// element of a `GetPositionInfo` response.
///
/// Returns a `Track` with the metadata fields populated; `duration` and
/// `playlist_position` are left for the caller, which reads them from
/// sibling elements of the same response.
pub fn parse_track_metadata(xml: &str) -> Result<Track> {
    let root = Element::parse(xml.as_bytes())
        .map_err(|e| SocoError::ParseError(format!("failed to parse DIDL-Lite: {}", e)))?;

    let item = root
        .get_child("item")
        .ok_or_else(|| SocoError::ParseError("missing item element in DIDL-Lite".to_string()))?;

    Ok(track_from_item(item))
}

/// Parse a ContentDirectory `Browse` result into the queue it describes.
///
/// Tracks are returned in document order, which is playback order, with
/// `playlist_position` numbered from 1.
pub fn parse_queue(xml: &str) -> Result<Vec<Track>> {
    let root = Element::parse(xml.as_bytes())
        .map_err(|e| SocoError::ParseError(format!("failed to parse DIDL-Lite: {}", e)))?;

    let tracks = root
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(|element| element.name == "item")
        .enumerate()
        .map(|(i, item)| {
            let mut track = track_from_item(item);
            track.playlist_position = i + 1;
            track.duration = item
                .get_child("res")
                .and_then(|res| res.attributes.get("duration"))
                .cloned()
                .unwrap_or_default();
            track
        })
        .collect();

    Ok(tracks)
}

fn track_from_item(item: &Element) -> Track {
    Track {
        title: child_text(item, "title"),
        artist: child_text(item, "creator"),
        album: child_text(item, "album"),
        duration: String::new(),
        playlist_position: 0,
    }
}

fn child_text(item: &Element, name: &str) -> String {
    match item.get_child(name).and_then(|child| child.get_text()) {
        Some(text) => html_escape::decode_html_entities(&text).into_owned(),
        None => String::new(),
    }
}
