use grab_engine::GrabEvent;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex};

fn download_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} {msg}\n[{elapsed_precise}] [{bar:40.green/white}] {pos}/{len}")
        .unwrap()
        .progress_chars("=> ")
}

/// Renders one bar per download run, driven by [`GrabEvent`]s.
#[derive(Clone)]
pub struct ProgressManager {
    multi: MultiProgress,
    bar: Arc<Mutex<Option<ProgressBar>>>,
    disabled: bool,
}

impl ProgressManager {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bar: Arc::new(Mutex::new(None)),
            disabled: false,
        }
    }

    pub fn new_disabled() -> Self {
        Self {
            multi: MultiProgress::new(),
            bar: Arc::new(Mutex::new(None)),
            disabled: true,
        }
    }

    pub fn handle_event(&self, event: GrabEvent) {
        if self.disabled {
            return;
        }

        let mut bar = self.bar.lock().unwrap();
        match event {
            GrabEvent::ManifestFetched { segments, .. } => {
                let pb = self.multi.add(ProgressBar::new(segments as u64));
                pb.set_style(download_style());
                pb.set_message("Starting download");
                *bar = Some(pb);
            }
            GrabEvent::SegmentStarted { filename, .. } => {
                if let Some(pb) = bar.as_ref() {
                    pb.set_message(format!("Downloading {filename}"));
                }
            }
            GrabEvent::SegmentFinished { .. } => {
                if let Some(pb) = bar.as_ref() {
                    pb.inc(1);
                }
            }
            GrabEvent::Completed { tally } => {
                if let Some(pb) = bar.take() {
                    pb.finish_with_message(format!(
                        "Downloaded {}/{} segments",
                        tally.succeeded, tally.total
                    ));
                }
            }
        }
    }

    #[inline]
    #[allow(unused)]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}
