//! 窗口界面
//!
//! 拖放区 + “Choose PDF…” 按钮 + 状态标签 + 输出面板。
//! 审阅交给 `ReviewWorker`，每帧从事件通道取结果追加到输出面板。

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui;
use tracing::{debug, warn};

use crate::error::InputError;
use crate::orchestrator::{ReviewWorker, WorkerEvent};
use crate::workflow::{ensure_pdf_extension, validate_submission};

const DROP_HINT: &str = "⬇️  Drop PDF here";
const PROCESSING: &str = "Processing…";
const READY: &str = "Ready";

/// 弹窗提示
struct Notice {
    title: &'static str,
    message: String,
}

/// 界面状态
pub struct ReviewApp {
    worker: ReviewWorker,
    events: Receiver<WorkerEvent>,
    output: String,
    busy: bool,
    notice: Option<Notice>,
}

impl ReviewApp {
    pub fn new(worker: ReviewWorker, events: Receiver<WorkerEvent>) -> Self {
        Self {
            worker,
            events,
            output: String::new(),
            busy: false,
            notice: None,
        }
    }

    /// 启动时附加一行提示（例如缺少 API 密钥）
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.output.push_str(&banner.into());
        self.output.push('\n');
        self
    }

    /// 处理拖放进来的文件，只取第一个
    ///
    /// 提示框未关闭时，新的拖放会关掉它再处理。
    fn on_drop(&mut self, dropped: &[egui::DroppedFile]) {
        let Some(file) = dropped.first() else {
            return;
        };
        if let Some(notice) = self.notice.take() {
            debug!("新的拖放关闭了提示框: {}", notice.title);
        }
        if dropped.len() > 1 {
            debug!("拖入了 {} 个文件，只处理第一个", dropped.len());
        }

        let path = match &file.path {
            Some(path) => path.clone(),
            None => PathBuf::from(&file.name),
        };

        if let Err(e) = ensure_pdf_extension(&path) {
            self.show_input_error(e);
            return;
        }
        self.process_pdf(path);
    }

    fn choose_pdf(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Select PDF")
            .add_filter("PDF files", &["pdf"])
            .pick_file();

        if let Some(path) = picked {
            self.process_pdf(path);
        }
    }

    fn process_pdf(&mut self, path: PathBuf) {
        if let Err(e) = validate_submission(&path) {
            self.show_input_error(e);
            return;
        }

        match self.worker.submit(path) {
            Ok(()) => self.busy = true,
            Err(e) => {
                warn!("⚠️ 忽略提交: {}", e);
                self.notice = Some(Notice {
                    title: "Busy",
                    message: "A review is already in progress.".to_string(),
                });
            }
        }
    }

    fn show_input_error(&mut self, error: InputError) {
        let title = match error {
            InputError::NotFound { .. } => "Not found",
            InputError::NotPdf { .. } | InputError::EmptyDrop => "Invalid file",
        };
        self.notice = Some(Notice {
            title,
            message: error.to_string(),
        });
    }

    /// 取出 worker 事件并更新界面状态
    fn drain_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(WorkerEvent::Started { path }) => {
                    self.busy = true;
                    self.append_output(&format!("Loading: {}\n", path.display()));
                }
                Ok(WorkerEvent::Finished { outcome, .. }) => {
                    self.append_output(&format!("\n{}\n", outcome.display_text()));
                    self.busy = false;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.busy = false;
                    break;
                }
            }
        }
    }

    fn append_output(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn notice_window(&mut self, ctx: &egui::Context) {
        let mut dismissed = false;
        if let Some(notice) = &self.notice {
            egui::Window::new(notice.title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(&notice.message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
        }
        if dismissed {
            self.notice = None;
        }
    }
}

impl eframe::App for ReviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        self.on_drop(&dropped);
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(egui::RichText::new("Drop a PDF or choose one").size(18.0).strong());
            ui.add_space(8.0);

            // 拖放区
            ui.group(|ui| {
                ui.set_min_height(120.0);
                ui.set_width(ui.available_width());
                ui.centered_and_justified(|ui| {
                    let text = if self.busy { PROCESSING } else { DROP_HINT };
                    let label = egui::RichText::new(text).size(15.0);
                    if hovering && !self.busy {
                        ui.label(label.strong());
                    } else {
                        ui.label(label);
                    }
                });
            });

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                let choose = ui.add_enabled(!self.busy, egui::Button::new("Choose PDF…"));
                if choose.clicked() {
                    self.choose_pdf();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(if self.busy { PROCESSING } else { READY });
                });
            });

            ui.add_space(8.0);
            ui.label(egui::RichText::new("Agent output:").strong());
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut self.output)
                            .font(egui::TextStyle::Monospace)
                            .desired_width(f32::INFINITY)
                            .desired_rows(16),
                    );
                });
        });

        self.notice_window(ctx);
    }
}
