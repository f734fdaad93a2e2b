//! 窗口模式

pub mod app;

pub use app::ReviewApp;

use std::sync::mpsc::Receiver;

use eframe::egui;

use crate::orchestrator::{ReviewWorker, WorkerEvent};

const WINDOW_TITLE: &str = "PDF → ChatGPT Agent";

/// 打开窗口，直到用户关闭
///
/// 必须在主线程调用。
pub fn run(
    worker: ReviewWorker,
    events: Receiver<WorkerEvent>,
    banner: Option<String>,
) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([640.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            // worker 每发出一个事件就请求重绘，UI 线程随即取走结果
            let ctx = cc.egui_ctx.clone();
            let worker = worker.with_notifier(move || ctx.request_repaint());

            let mut app = ReviewApp::new(worker, events);
            if let Some(banner) = banner {
                app = app.with_banner(banner);
            }
            Ok(Box::new(app))
        }),
    )
}
