use serde::Serialize;
use tracing::{debug, info};

use crate::client::ScriptClient;
use crate::command;
use crate::connection::CommandChannel;
use crate::error::{ClientError, Result};
use crate::model::{LabelInterval, LabelTrack};

/// Position of one track's labels in the project-wide label numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelRange {
    /// Global index of the track's first label.
    pub first: usize,
    /// Number of labels on the track.
    pub count: usize,
}

/// Locate `track` in a label listing.
///
/// Labels are numbered across all label tracks in host order, so `first` is
/// the number of labels on the tracks listed before it. Returns `None` when
/// the track is not listed, which is distinct from a listed track with no
/// labels.
pub fn locate_label_range(tracks: &[LabelTrack], track: usize) -> Option<LabelRange> {
    let mut seen = 0usize;
    for label_track in tracks {
        if label_track.index == track {
            return Some(LabelRange {
                first: seen,
                count: label_track.labels.len(),
            });
        }
        seen += label_track.labels.len();
    }
    None
}

impl<C: CommandChannel> ScriptClient<C> {
    /// Global label range of `track`, or `None` if it is not a label track.
    pub fn label_range(&mut self, track: usize) -> Result<Option<LabelRange>> {
        let tracks = self.label_tracks()?;
        Ok(locate_label_range(&tracks, track))
    }

    /// Number of labels on `track`, or `None` if it is not a label track.
    pub fn label_count(&mut self, track: usize) -> Result<Option<usize>> {
        Ok(self.label_range(track)?.map(|range| range.count))
    }

    /// Add one label to `track`.
    pub fn add_label(&mut self, track: usize, label: &LabelInterval) -> Result<()> {
        self.add_labels(track, std::slice::from_ref(label))
    }

    /// Append `labels` to `track` in order.
    ///
    /// The track is selected exclusively and the time selection reset before
    /// the first label. Each `AddLabel:` creates an empty label at the start
    /// of the track, which always takes the track's first global index, so
    /// every `SetLabel:` targets that same index. The index is computed once
    /// up front and must not be recomputed per label.
    ///
    /// Label texts are checked before anything is sent, so a text the host
    /// cannot receive leaves the project untouched. Otherwise stops at the
    /// first failure; labels already added stay in place.
    pub fn add_labels(&mut self, track: usize, labels: &[LabelInterval]) -> Result<()> {
        check_label_texts(labels)?;

        let range = self
            .label_range(track)?
            .ok_or(ClientError::LabelTrackNotFound(track))?;
        debug!(track, first = range.first, count = range.count, "located label track");

        self.run(&command::select_track(track))?;
        self.run(&command::select_time(0.0, 0.0))?;

        for (position, label) in labels.iter().enumerate() {
            let set_label = command::set_label(range.first, &label.text, label.start, label.end);
            self.run(command::ADD_LABEL)
                .and_then(|_| self.run(&set_label))
                .map_err(|err| at_interval(err, position))?;
        }

        info!(track, added = labels.len(), "added labels");
        Ok(())
    }
}

fn check_label_texts(labels: &[LabelInterval]) -> Result<()> {
    for (position, label) in labels.iter().enumerate() {
        if let Some(character) = label
            .text
            .chars()
            .find(|c| command::LABEL_TEXT_FORBIDDEN.contains(c))
        {
            return Err(ClientError::InvalidLabelText {
                interval: position,
                text: label.text.clone(),
                character,
            });
        }
    }
    Ok(())
}

fn at_interval(err: ClientError, position: usize) -> ClientError {
    match err {
        ClientError::CommandFailed {
            command, message, ..
        } => ClientError::CommandFailed {
            command,
            message,
            interval: Some(position),
        },
        other => other,
    }
}
