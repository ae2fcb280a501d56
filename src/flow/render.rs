//! Pure rendering of the session into a [`View`]

use super::session::Session;
use super::view::{ButtonId, Element, View};
use crate::navigator::{Route, Screen};
use crate::task::{TaskDraft, TaskKind};

pub fn render(session: &Session) -> View {
    let navigator = session.navigator();
    let route = navigator.current_route();

    match navigator.screen() {
        Screen::Start => View::new(route, "Sample Task")
            .heading("Let's start with a Sample Task for practice.")
            .text("Pehele hum ek sample task karte hain.")
            .button(ButtonId::StartTask, "Start Sample Task", true),

        Screen::NoiseTest(gate) => {
            let view = View::new(route, "Noise Check")
                .heading(format!("Noise level: {} dB", gate.level()));
            if gate.passes() {
                view.text("Good to proceed")
                    .button(ButtonId::Proceed, "Proceed", true)
            } else {
                view.alert("Please move to a quieter place")
                    .button(ButtonId::Proceed, "Proceed", false)
            }
        }

        Screen::Select => View::new(route, "Choose a Task")
            .button(ButtonId::TextTask, "Text Reading Task", true)
            .button(ButtonId::ImageTask, "Image Description Task", true)
            .button(ButtonId::PhotoTask, "Photo Capture Task", true)
            .button(ButtonId::History, "Task History", true),

        Screen::Task(draft) => render_task(route, draft),

        Screen::History => {
            let store = session.store();
            let per_kind: Vec<String> = TaskKind::ALL
                .iter()
                .map(|&kind| format!("{} {}", kind, store.count_by_kind(kind)))
                .collect();
            let view = View::new(route, "Task History")
                .push(Element::Stats {
                    total_tasks: store.total_count(),
                    total_seconds: store.total_duration_seconds(),
                })
                .text(format!("By type: {}", per_kind.join(", ")));
            store
                .iter()
                .fold(view, |view, record| view.push(Element::TaskCard(record.clone())))
                .button(ButtonId::Back, "Back", true)
        }
    }
}

fn render_task(route: Route, draft: &TaskDraft) -> View {
    let view = match route {
        Route::TextTask => View::new(route, "Text Reading")
            .text("Read the passage aloud in your native language.")
            .text(draft.text().unwrap_or_default()),
        Route::ImageTask => View::new(route, "Image Description")
            .text("Describe what you see in your native language.")
            .push(Element::ImagePlaceholder("Image".to_string())),
        _ => View::new(route, "Photo Capture")
            .text("Capture Image and describe it.")
            .push(Element::TextField {
                label: "Description".to_string(),
                value: draft.text().unwrap_or_default().to_string(),
            }),
    };

    view.text(format!(
        "Simulated recording duration: {}s",
        draft.duration_seconds()
    ))
    .button(ButtonId::Submit, "Submit", draft.is_submittable())
}
