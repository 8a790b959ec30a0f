use std::fs;
use std::sync::Arc;

use crossbeam_channel::{bounded, Sender};
use rayon::ThreadPoolBuilder;

use crate::config::BuildConfig;
use crate::id::FontId;
use crate::parser;
use crate::record::{FontRecord, FontSource};
use crate::source::Candidate;
use crate::trace::{Trace, TraceLevel, TraceMsg, TraceReason};

use super::store::Store;

enum BuildMessage {
    Record(FontRecord),
    Trace(TraceMsg),
}

/// Parses every candidate in parallel and funnels the results through a
/// bounded channel to a single serializer (this function's caller-side
/// loop) that owns the store, so insertion is never contended — only the
/// channel hand-off is shared.
///
/// Reading and parsing distinct files is independent; a malformed or
/// unreadable candidate never aborts the build, it only produces a trace
/// entry and is skipped.
pub fn build(candidates: Vec<Candidate>, config: &BuildConfig) -> (Store, Trace) {
    log::debug!("building font cache from {} candidates", candidates.len());

    let (tx, rx) = bounded::<BuildMessage>(256);
    let mut store = Store::new();
    let mut trace = Trace::new(config.trace_cap);

    let pool = ThreadPoolBuilder::new()
        .num_threads(config.parallelism)
        .build()
        .expect("thread pool construction does not fail for valid sizes");

    pool.scope(|scope| {
        for candidate in candidates {
            let tx = tx.clone();
            scope.spawn(move |_| process_candidate(candidate, &tx));
        }
        drop(tx);

        for message in rx {
            match message {
                BuildMessage::Record(record) => {
                    store.insert(record);
                }
                BuildMessage::Trace(msg) => trace.push(msg),
            }
        }
    });

    log::info!(
        "font cache build complete: {} fonts indexed, {} trace entries ({} dropped)",
        store.len(),
        trace.len(),
        trace.dropped(),
    );

    (store, trace)
}

fn process_candidate(candidate: Candidate, tx: &Sender<BuildMessage>) {
    match candidate {
        Candidate::File(path) => {
            let path_string = path.display().to_string();
            let bytes = match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(err) => {
                    log::warn!("skipping unreadable font file {path_string}: {err}");
                    let _ = tx.send(BuildMessage::Trace(TraceMsg::new(
                        TraceLevel::Warning,
                        path_string,
                        TraceReason::SourceUnreadable { detail: err.to_string().into() },
                    )));
                    return;
                }
            };
            parse_all_faces(&bytes, &path_string, tx, |face_index| FontSource::File {
                path: path.clone(),
                face_index,
            });
        }
        Candidate::Memory { label, bytes } => {
            let origin = format!("memory:{label}");
            parse_all_faces(&bytes, &origin, tx, |face_index| FontSource::Memory {
                bytes: Arc::clone(&bytes),
                face_index,
                label: label.clone(),
            });
        }
    }
}

fn parse_all_faces(
    bytes: &[u8],
    origin: &str,
    tx: &Sender<BuildMessage>,
    make_source: impl Fn(u32) -> FontSource,
) {
    let face_count = match parser::probe(bytes) {
        Ok(count) => count,
        Err(err) => {
            log::debug!("skipping {origin}: {err}");
            let _ = tx.send(BuildMessage::Trace(TraceMsg::new(
                TraceLevel::Info,
                origin,
                TraceReason::ParseFailed { detail: err.to_string().into() },
            )));
            return;
        }
    };

    for face_index in 0..face_count {
        match parser::parse(bytes, face_index) {
            Ok(parsed) => {
                let record = FontRecord {
                    id: FontId::new(),
                    source: make_source(face_index),
                    metadata: parsed.metadata,
                    coverage: parsed.coverage,
                    style_flags: parsed.style_flags,
                    weight: parsed.weight,
                    stretch: parsed.stretch,
                };
                let _ = tx.send(BuildMessage::Record(record));
            }
            Err(err) => {
                let _ = tx.send(BuildMessage::Trace(TraceMsg::new(
                    TraceLevel::Info,
                    origin,
                    TraceReason::ParseFailed { detail: err.to_string().into() },
                )));
            }
        }
    }
}
