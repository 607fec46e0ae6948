// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Dashboard page with aggregate validation statistics.
//!
//! Mounting the page starts exactly one background fetch. While it is
//! pending only skeleton placeholders are shown. A failed fetch is not
//! retried: the page falls back to demo figures and shows a warning.
//!
//! Every fetch is tagged with the generation current at mount time.
//! Unmounting or remounting bumps the generation, so a late result from
//! an earlier mount is dropped instead of overwriting newer state.

use crate::api::StatsSource;
use crate::models::project::{Emphasis, ProjectStatus};
use crate::models::stats::DashboardStats;
use crate::ui::{panels, skeleton, stat_card};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

pub const FALLBACK_WARNING: &str =
    "Could not load dashboard data from the API. Showing demo data instead.";

const STAT_PLACEHOLDERS: usize = 4;
const CARD_PLACEHOLDERS: usize = 2;

/// Where the page is in its fetch lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    /// Not mounted.
    Idle,
    Loading,
    Success(DashboardStats),
    Error {
        message: String,
        fallback: DashboardStats,
    },
}

/// One compact metric tile.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub value: String,
    pub trend: Option<&'static str>,
}

/// A recent test session entry. Illustrative only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecentSession {
    pub title: &'static str,
    pub detail: &'static str,
    pub when: &'static str,
    pub status: ProjectStatus,
}

/// A system health bar. Illustrative only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemStatus {
    pub label: &'static str,
    pub percent: u8,
    pub emphasis: Emphasis,
}

pub const RECENT_SESSIONS: [RecentSession; 4] = [
    RecentSession {
        title: "Urban VRU Detection - Run #24",
        detail: "45 videos, front-facing",
        when: "2 hours ago",
        status: ProjectStatus::Completed,
    },
    RecentSession {
        title: "Driver Monitoring - Run #12",
        detail: "18 videos, in-cab",
        when: "5 hours ago",
        status: ProjectStatus::Active,
    },
    RecentSession {
        title: "Highway Blind Spot - Run #18",
        detail: "32 videos, rear-facing",
        when: "1 day ago",
        status: ProjectStatus::Completed,
    },
    RecentSession {
        title: "Urban VRU Detection - Run #23",
        detail: "40 videos, front-facing",
        when: "2 days ago",
        status: ProjectStatus::Completed,
    },
];

pub const SYSTEM_STATUS: [SystemStatus; 3] = [
    SystemStatus {
        label: "API Server",
        percent: 98,
        emphasis: Emphasis::Success,
    },
    SystemStatus {
        label: "Processing Queue",
        percent: 45,
        emphasis: Emphasis::Info,
    },
    SystemStatus {
        label: "Storage Usage",
        percent: 72,
        emphasis: Emphasis::Warning,
    },
];

/// What the page should draw this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Skeleton {
        stat_placeholders: usize,
        card_placeholders: usize,
    },
    Content {
        stat_cards: Vec<StatCard>,
        warning: Option<String>,
        recent_sessions: &'static [RecentSession],
        system_status: &'static [SystemStatus],
    },
}

/// Result of a background fetch, tagged with the mount that started it.
struct FetchOutcome {
    generation: u64,
    result: Result<DashboardStats, String>,
}

/// Dashboard page state.
pub struct DashboardPage {
    state: DashboardState,
    mounted: bool,
    generation: u64,
    sender: Sender<FetchOutcome>,
    receiver: Receiver<FetchOutcome>,
    warning_dismissed: bool,
    discarded_results: usize,
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardPage {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            state: DashboardState::Idle,
            mounted: false,
            generation: 0,
            sender,
            receiver,
            warning_dismissed: false,
            discarded_results: 0,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_loading(&self) -> bool {
        self.state == DashboardState::Loading
    }

    /// Number of fetch results dropped because their mount had ended.
    #[cfg(test)]
    pub fn discarded_results(&self) -> usize {
        self.discarded_results
    }

    /// Start the page and its single statistics fetch. No-op while mounted.
    pub fn mount(&mut self, source: Arc<dyn StatsSource>) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.generation += 1;
        self.state = DashboardState::Loading;
        self.warning_dismissed = false;

        let generation = self.generation;
        let sender = self.sender.clone();
        log::info!("Dashboard mounted, fetching statistics (generation {})", generation);

        std::thread::spawn(move || {
            let result = source
                .fetch_dashboard_statistics()
                .map_err(|e| format!("{:#}", e));
            let _ = sender.send(FetchOutcome { generation, result });
        });
    }

    /// Tear the page down. Any fetch still in flight will be ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.generation += 1;
        self.state = DashboardState::Idle;
        log::info!("Dashboard unmounted");
    }

    /// Apply any finished fetch belonging to the current mount.
    pub fn poll(&mut self) {
        while let Ok(outcome) = self.receiver.try_recv() {
            if !self.mounted || outcome.generation != self.generation {
                self.discarded_results += 1;
                log::debug!(
                    "Discarding statistics from generation {} (current {})",
                    outcome.generation,
                    self.generation
                );
                continue;
            }

            match outcome.result {
                Ok(stats) => {
                    log::info!(
                        "Loaded dashboard statistics: {} projects, {} videos, {} tests",
                        stats.project_count,
                        stats.video_count,
                        stats.test_count
                    );
                    self.state = DashboardState::Success(stats);
                }
                Err(e) => {
                    log::warn!("Failed to fetch dashboard statistics: {}", e);
                    self.state = DashboardState::Error {
                        message: FALLBACK_WARNING.to_string(),
                        fallback: DashboardStats::fallback(),
                    };
                }
            }
        }
    }

    /// Hide the fallback warning until the next mount.
    pub fn dismiss_warning(&mut self) {
        self.warning_dismissed = true;
    }

    /// Describe the current frame independent of any rendering backend.
    pub fn view(&self) -> DashboardView {
        let (stats, warning) = match &self.state {
            DashboardState::Idle | DashboardState::Loading => {
                return DashboardView::Skeleton {
                    stat_placeholders: STAT_PLACEHOLDERS,
                    card_placeholders: CARD_PLACEHOLDERS,
                };
            }
            DashboardState::Success(stats) => (stats, None),
            DashboardState::Error { message, fallback } => {
                let warning = (!self.warning_dismissed).then(|| message.clone());
                (fallback, warning)
            }
        };

        DashboardView::Content {
            stat_cards: stat_cards(stats),
            warning,
            recent_sessions: &RECENT_SESSIONS,
            system_status: &SYSTEM_STATUS,
        }
    }

    /// Draw the page.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("Dashboard");
        ui.label(egui::RichText::new("Overview of camera validation activity").weak());
        ui.add_space(12.0);

        match self.view() {
            DashboardView::Skeleton {
                stat_placeholders,
                card_placeholders,
            } => {
                skeleton::show(ui, stat_placeholders, card_placeholders);
            }
            DashboardView::Content {
                stat_cards,
                warning,
                recent_sessions,
                system_status,
            } => {
                if let Some(message) = warning {
                    if panels::warning_banner(ui, &message) {
                        self.dismiss_warning();
                    }
                    ui.add_space(8.0);
                }

                ui.columns(stat_cards.len(), |columns| {
                    for (column, card) in columns.iter_mut().zip(&stat_cards) {
                        stat_card::show(column, card);
                    }
                });

                ui.add_space(12.0);
                ui.columns(2, |columns| {
                    panels::recent_sessions(&mut columns[0], recent_sessions);
                    panels::system_status(&mut columns[1], system_status);
                });
            }
        }
    }
}

fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Projects",
            icon: "📁",
            value: stats.project_count.to_string(),
            trend: None,
        },
        StatCard {
            title: "Videos",
            icon: "🎞",
            value: stats.video_count.to_string(),
            trend: None,
        },
        StatCard {
            title: "Tests Run",
            icon: "▶",
            value: stats.test_count.to_string(),
            trend: None,
        },
        StatCard {
            title: "Avg. Accuracy",
            icon: "🎯",
            value: format!("{}%", stats.average_accuracy),
            trend: Some("+2.1%"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    /// Answers every call with the same result after an optional delay.
    struct FixedSource {
        result: Result<DashboardStats, String>,
        delay: Duration,
        calls: AtomicUsize,
    }

    impl FixedSource {
        fn ok(stats: DashboardStats) -> Arc<Self> {
            Arc::new(Self {
                result: Ok(stats),
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                result: Err("connection refused".to_string()),
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl StatsSource for FixedSource {
        fn fetch_dashboard_statistics(&self) -> Result<DashboardStats> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(self.delay);
            self.result.clone().map_err(|e| anyhow!(e))
        }
    }

    /// Each call blocks until the test releases it with a result.
    struct GatedSource {
        gates: Mutex<VecDeque<Receiver<Result<DashboardStats, String>>>>,
        started: AtomicUsize,
    }

    impl GatedSource {
        fn new(count: usize) -> (Arc<Self>, Vec<Sender<Result<DashboardStats, String>>>) {
            let mut gates = VecDeque::new();
            let mut releases = Vec::new();
            for _ in 0..count {
                let (tx, rx) = channel();
                gates.push_back(rx);
                releases.push(tx);
            }
            (
                Arc::new(Self {
                    gates: Mutex::new(gates),
                    started: AtomicUsize::new(0),
                }),
                releases,
            )
        }
    }

    impl StatsSource for GatedSource {
        fn fetch_dashboard_statistics(&self) -> Result<DashboardStats> {
            let gate = self
                .gates
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| anyhow!("no scripted response"))?;
            self.started.fetch_add(1, Ordering::SeqCst);
            gate.recv()
                .map_err(|_| anyhow!("gate dropped"))?
                .map_err(|e| anyhow!(e))
        }
    }

    fn sample_stats() -> DashboardStats {
        DashboardStats {
            project_count: 5,
            video_count: 12,
            test_count: 8,
            average_accuracy: 91.3,
            active_tests: 2,
            total_detections: 340,
        }
    }

    fn wait_until(page: &mut DashboardPage, done: impl Fn(&DashboardPage) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            page.poll();
            if done(page) {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("timed out waiting for dashboard, state: {:?}", page.state());
    }

    fn settle(page: &mut DashboardPage) {
        wait_until(page, |p| !p.is_loading());
    }

    fn card_values(view: &DashboardView) -> Vec<String> {
        match view {
            DashboardView::Content { stat_cards, .. } => {
                stat_cards.iter().map(|c| c.value.clone()).collect()
            }
            DashboardView::Skeleton { .. } => panic!("expected content, got skeleton"),
        }
    }

    #[test]
    fn test_unmounted_page_is_idle_skeleton() {
        let page = DashboardPage::new();
        assert_eq!(page.state(), &DashboardState::Idle);
        assert!(matches!(page.view(), DashboardView::Skeleton { .. }));
    }

    #[test]
    fn test_pending_fetch_shows_only_skeleton() {
        let (source, _releases) = GatedSource::new(1);
        let mut page = DashboardPage::new();
        page.mount(source);
        page.poll();

        assert!(page.is_loading());
        assert_eq!(
            page.view(),
            DashboardView::Skeleton {
                stat_placeholders: 4,
                card_placeholders: 2,
            }
        );
    }

    #[test]
    fn test_success_passes_stats_through() {
        let source = Arc::new(FixedSource {
            result: Ok(sample_stats()),
            delay: Duration::from_millis(50),
            calls: AtomicUsize::new(0),
        });
        let mut page = DashboardPage::new();
        page.mount(source.clone());
        settle(&mut page);

        assert_eq!(page.state(), &DashboardState::Success(sample_stats()));
        let view = page.view();
        assert_eq!(card_values(&view), vec!["5", "12", "8", "91.3%"]);
        match view {
            DashboardView::Content {
                warning,
                stat_cards,
                recent_sessions,
                system_status,
            } => {
                assert!(warning.is_none());
                assert_eq!(stat_cards[3].trend, Some("+2.1%"));
                assert_eq!(recent_sessions.len(), 4);
                assert_eq!(system_status.len(), 3);
            }
            DashboardView::Skeleton { .. } => unreachable!(),
        }
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn test_failure_uses_fallback_and_warns() {
        let source = FixedSource::failing();
        let mut page = DashboardPage::new();
        page.mount(source.clone());
        settle(&mut page);

        match page.state() {
            DashboardState::Error { fallback, .. } => {
                assert_eq!(*fallback, DashboardStats::fallback());
            }
            other => panic!("expected error state, got {:?}", other),
        }
        let view = page.view();
        assert_eq!(card_values(&view), vec!["0", "0", "0", "94.2%"]);
        match view {
            DashboardView::Content { warning, .. } => {
                let warning = warning.expect("warning banner");
                assert!(warning.contains("demo"));
            }
            DashboardView::Skeleton { .. } => unreachable!(),
        }
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn test_accuracy_card_shows_fetched_value_unrounded() {
        for (accuracy, expected) in [(87.25, "87.25%"), (99.99, "99.99%"), (91.3, "91.3%")] {
            let stats = DashboardStats {
                average_accuracy: accuracy,
                ..sample_stats()
            };
            assert_eq!(stat_cards(&stats)[3].value, expected);
        }
    }

    #[test]
    fn test_dismissed_warning_stays_hidden_until_remount() {
        let source = FixedSource::failing();
        let mut page = DashboardPage::new();
        page.mount(source.clone());
        settle(&mut page);

        page.dismiss_warning();
        assert!(matches!(page.view(), DashboardView::Content { warning: None, .. }));

        page.unmount();
        page.mount(source);
        settle(&mut page);
        assert!(matches!(page.view(), DashboardView::Content { warning: Some(_), .. }));
    }

    #[test]
    fn test_one_fetch_per_mount() {
        let source = FixedSource::ok(sample_stats());
        let mut page = DashboardPage::new();

        page.mount(source.clone());
        page.mount(source.clone());
        settle(&mut page);
        assert_eq!(source.calls(), 1);

        page.unmount();
        assert_eq!(page.state(), &DashboardState::Idle);
        page.mount(source.clone());
        assert!(page.is_loading());
        settle(&mut page);
        assert_eq!(source.calls(), 2);
    }

    #[test]
    fn test_result_after_unmount_is_discarded() {
        let (source, releases) = GatedSource::new(1);
        let mut page = DashboardPage::new();
        page.mount(source);
        page.unmount();

        releases[0].send(Ok(sample_stats())).unwrap();
        wait_until(&mut page, |p| p.discarded_results() == 1);
        assert_eq!(page.state(), &DashboardState::Idle);
    }

    #[test]
    fn test_stale_result_does_not_overwrite_remount() {
        let (source, releases) = GatedSource::new(2);
        let mut page = DashboardPage::new();
        page.mount(source.clone());
        let deadline = Instant::now() + Duration::from_secs(5);
        while source.started.load(Ordering::SeqCst) < 1 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
        }
        page.unmount();
        page.mount(source);

        // The first mount resolves late with different numbers.
        let stale = DashboardStats {
            project_count: 99,
            ..sample_stats()
        };
        releases[0].send(Ok(stale)).unwrap();
        wait_until(&mut page, |p| p.discarded_results() == 1);
        assert!(page.is_loading());

        releases[1].send(Ok(sample_stats())).unwrap();
        settle(&mut page);
        assert_eq!(page.state(), &DashboardState::Success(sample_stats()));
    }

    #[test]
    fn test_render_each_state_headless() {
        let ctx = egui::Context::default();
        let (gated, _releases) = GatedSource::new(1);
        let mut loading = DashboardPage::new();
        loading.mount(gated);

        let mut loaded = DashboardPage::new();
        loaded.mount(FixedSource::ok(sample_stats()));
        settle(&mut loaded);

        let mut failed = DashboardPage::new();
        failed.mount(FixedSource::failing());
        settle(&mut failed);

        for page in [&mut loading, &mut loaded, &mut failed] {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| page.show(ui));
            });
        }
    }
}
