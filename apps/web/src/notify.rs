//! Toasts and the loading overlay.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use serde_json::json;

use crate::templates::{render, TOAST};

pub const DEFAULT_TOAST_MS: u64 = 3000;
pub const FADE_OUT_MS: u64 = 300;

/// Millisecond clock supplied by the host.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_ms(&self) -> u64 {
        self.as_ref().now_ms()
    }
}

/// Clock advanced by hand; used by the CLI host and in tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub const fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    FadingOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: u64,
    pub duration_ms: u64,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn render(&self) -> String {
        render(
            TOAST,
            &json!({
                "id": self.id.0,
                "kind": self.kind.as_str(),
                "fading": self.phase == ToastPhase::FadingOut,
                "icon": self.kind.icon(),
                "title": self.kind.title(),
                "message": self.message,
            }),
        )
    }
}

/// What happened to the toast stack since the host last looked.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ToastChanges {
    /// Markup of toasts to append, oldest first.
    pub added: Vec<(ToastId, String)>,
    pub faded: Vec<ToastId>,
    pub removed: Vec<ToastId>,
}

impl ToastChanges {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.faded.is_empty() && self.removed.is_empty()
    }
}

/// Page-wide loading overlay. Every `show` must be paired with a `hide`;
/// the overlay stays up until the last holder releases it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadingOverlay {
    holders: u32,
    message: String,
}

impl LoadingOverlay {
    pub fn show(&mut self, message: impl Into<String>) {
        self.holders += 1;
        self.message = message.into();
    }

    pub fn hide(&mut self) {
        self.holders = self.holders.saturating_sub(1);
    }

    pub const fn is_active(&self) -> bool {
        self.holders > 0
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Default)]
pub struct Notifier {
    toasts: Vec<Toast>,
    next_id: u64,
    added: Vec<ToastId>,
    faded: Vec<ToastId>,
    removed: Vec<ToastId>,
    pub overlay: LoadingOverlay,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now_ms: u64) -> ToastId {
        self.show_for(message, kind, DEFAULT_TOAST_MS, now_ms)
    }

    pub fn show_for(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration_ms: u64,
        now_ms: u64,
    ) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            shown_at: now_ms,
            duration_ms,
            phase: ToastPhase::Visible,
        });
        self.added.push(id);
        id
    }

    /// Advance every toast: fade once its duration is over, drop it after
    /// the fade. Returns whether anything changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Self {
            toasts,
            faded,
            removed,
            ..
        } = self;
        let before = (faded.len(), removed.len());

        toasts.retain_mut(|toast| {
            let fade_at = toast.shown_at + toast.duration_ms;
            if now_ms >= fade_at + FADE_OUT_MS {
                removed.push(toast.id);
                return false;
            }
            if now_ms >= fade_at && toast.phase == ToastPhase::Visible {
                toast.phase = ToastPhase::FadingOut;
                faded.push(toast.id);
            }
            true
        });

        before != (faded.len(), removed.len())
    }

    /// Drain everything that changed since the last call. A toast that
    /// appeared and vanished in between is never reported.
    pub fn take_changes(&mut self) -> ToastChanges {
        let added = std::mem::take(&mut self.added);
        let mut faded = std::mem::take(&mut self.faded);
        let mut removed = std::mem::take(&mut self.removed);

        removed.retain(|id| !added.contains(id));
        faded.retain(|id| !added.contains(id) && !removed.contains(id));
        let added = added
            .iter()
            .filter_map(|id| self.toasts.iter().find(|toast| toast.id == *id))
            .map(|toast| (toast.id, toast.render()))
            .collect();

        ToastChanges {
            added,
            faded,
            removed,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn render_toasts(&self) -> Vec<String> {
        self.toasts.iter().map(Toast::render).collect()
    }
}
