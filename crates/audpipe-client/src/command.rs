//! Builders for the command vocabulary the client emits.
//!
//! Case and spacing are significant to the host.

use crate::info::{InfoFormat, InfoType};
use crate::model::TrackKind;

/// Creates a label at the current selection of the selected track.
pub const ADD_LABEL: &str = "AddLabel:";

/// Characters that cannot appear in `SetLabel:` text: line terminators end
/// the command early and a double quote ends the `Text` parameter.
pub const LABEL_TEXT_FORBIDDEN: [char; 4] = ['\r', '\n', '\0', '"'];

pub fn get_info(info_type: InfoType, format: InfoFormat) -> String {
    format!("GetInfo: Type={info_type} Format={format}")
}

pub fn new_track(kind: TrackKind) -> String {
    format!("New{kind}Track:")
}

/// Select exactly one track.
pub fn select_track(track: usize) -> String {
    format!("SelectTracks: Track={track} Mode=Set")
}

pub fn select_time(start: f64, stop: f64) -> String {
    format!("SelectTime: Start={start} Stop={stop}")
}

/// Times use six decimals, like C's `%f`.
///
/// `text` goes between the quotes verbatim; callers reject text the host
/// cannot parse (see [`LABEL_TEXT_FORBIDDEN`]).
pub fn set_label(label: usize, text: &str, start: f64, end: f64) -> String {
    format!("SetLabel: Label={label} Text=\"{text}\" Start={start:.6} End={end:.6}")
}
