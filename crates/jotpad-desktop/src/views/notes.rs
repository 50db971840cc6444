//! Notes view - list, create, edit and delete the signed-in user's notes

use dioxus::prelude::*;
use jotpad_core::api::NotesApi;
use jotpad_core::view::{Effect, Mutation, NotesView};
use jotpad_core::{Note, NoteId};

use crate::components::{NoteCard, NoteModal, NoticeBanner, NotesHeader};
use crate::state::AppState;

#[component]
pub fn NotesPage() -> Element {
    let state = use_context::<AppState>();
    let mut view = use_signal(NotesView::new);
    let colors = (state.theme)().palette();

    // Fetch once on mount
    use_hook(move || {
        spawn(async move {
            refresh_notes(state, view).await;
        })
    });

    let current = view();
    let notes = current.notes().to_vec();
    let dialog = current.dialog().cloned();
    let notice = current.notice().map(str::to_string);

    let open_new = move |_| view.write().open_new();
    let logout = move |_| {
        let mutation = view.read().logout();
        spawn(run_mutation(state, view, mutation));
    };
    let edit_note = move |note: Note| view.write().open_edit(&note);
    let delete_note = move |id: NoteId| {
        let mutation = view.read().delete(&id);
        spawn(run_mutation(state, view, mutation));
    };
    let save = move |()| {
        let submitted = view.write().submit();
        if let Some(mutation) = submitted {
            spawn(run_mutation(state, view, mutation));
        }
    };

    rsx! {
        div {
            class: "notes-page",
            style: "max-width: 900px; margin: 0 auto; padding: 32px 24px;",

            NotesHeader { on_logout: logout, on_new: open_new }

            if let Some(message) = notice {
                NoticeBanner {
                    message,
                    on_dismiss: move |_| view.write().dismiss_notice(),
                }
            }

            div {
                class: "note-list",
                style: "display: flex; flex-direction: column; gap: 16px;",

                if notes.is_empty() {
                    div {
                        style: "padding: 48px 0; text-align: center; color: {colors.text_secondary};",
                        "No notes yet"
                    }
                }

                for note in notes {
                    NoteCard {
                        key: "{note.id}",
                        note: note.clone(),
                        on_edit: edit_note,
                        on_delete: delete_note,
                    }
                }
            }

            if let Some(dialog) = dialog {
                NoteModal {
                    dialog,
                    on_title: move |value: String| view.write().set_title(value),
                    on_content: move |value: String| view.write().set_content(value),
                    on_close: move |()| view.write().close_dialog(),
                    on_save: save,
                }
            }
        }
    }
}

/// `GET /notes` into the view.
async fn refresh_notes(mut state: AppState, mut view: Signal<NotesView>) {
    let Some(service) = state.service() else {
        return;
    };
    let result = service.api().list_notes().await;
    if view.write().apply_list(result) == Effect::NavigateToLogin {
        state.navigate_to_login();
    }
}

/// Send a mutation and carry out whatever the view asks for next.
async fn run_mutation(mut state: AppState, mut view: Signal<NotesView>, mutation: Mutation) {
    let Some(service) = state.service() else {
        return;
    };
    let result = mutation.send(service.api()).await;
    let effect = view.write().resolve(&mutation, result);
    match effect {
        Effect::None => {}
        Effect::Refresh => refresh_notes(state, view).await,
        Effect::NavigateToLogin => state.navigate_to_login(),
    }
}
