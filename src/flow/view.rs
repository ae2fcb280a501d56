//! Declarative description of a screen

use crate::navigator::Route;
use crate::task::TaskRecord;
use serde::Deserialize;

/// Every control that can appear on a screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonId {
    StartTask,
    Proceed,
    TextTask,
    ImageTask,
    PhotoTask,
    History,
    Submit,
    Back,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub id: ButtonId,
    pub label: String,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Heading(String),
    Text(String),
    /// Warning text, drawn in the error color
    Alert(String),
    /// Stand-in for the picture on the image task
    ImagePlaceholder(String),
    TextField { label: String, value: String },
    Stats { total_tasks: usize, total_seconds: u64 },
    TaskCard(TaskRecord),
    Button(Button),
}

/// Everything the renderer needs for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub route: Route,
    pub title: String,
    pub elements: Vec<Element>,
}

impl View {
    pub fn new(route: Route, title: impl Into<String>) -> Self {
        Self {
            route,
            title: title.into(),
            elements: Vec::new(),
        }
    }

    pub fn push(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    pub fn heading(self, text: impl Into<String>) -> Self {
        self.push(Element::Heading(text.into()))
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.push(Element::Text(text.into()))
    }

    pub fn alert(self, text: impl Into<String>) -> Self {
        self.push(Element::Alert(text.into()))
    }

    pub fn button(self, id: ButtonId, label: impl Into<String>, enabled: bool) -> Self {
        self.push(Element::Button(Button {
            id,
            label: label.into(),
            enabled,
        }))
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.elements.iter().filter_map(|e| match e {
            Element::Button(b) => Some(b),
            _ => None,
        })
    }

    pub fn find_button(&self, id: ButtonId) -> Option<&Button> {
        self.buttons().find(|b| b.id == id)
    }

    /// Present and enabled
    pub fn is_enabled(&self, id: ButtonId) -> bool {
        self.find_button(id).is_some_and(|b| b.enabled)
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.elements.iter().any(|e| match e {
            Element::Heading(t) | Element::Text(t) | Element::Alert(t) => t.contains(needle),
            _ => false,
        })
    }

    pub fn task_cards(&self) -> impl Iterator<Item = &TaskRecord> {
        self.elements.iter().filter_map(|e| match e {
            Element::TaskCard(r) => Some(r),
            _ => None,
        })
    }
}
