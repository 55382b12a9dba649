//! Small styled building blocks shared by every page.
//!
//! Class names map onto `assets/ui.css`; variants are plain enums so callers
//! never spell class strings themselves.

mod badge;
pub use badge::{Badge, BadgeVariant};

mod button;
pub use button::{Button, ButtonVariant};

mod card;
pub use card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};

mod dialog;
pub use dialog::Dialog;

mod input;
pub use input::{Input, Textarea};

mod label;
pub use label::Label;

mod spinner;
pub use spinner::{Skeleton, Spinner};

pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};
