//! Async driver pairing a [`NotesView`] with a [`NotesApi`].

use super::{Effect, Mutation, NotesView};
use crate::api::NotesApi;
use crate::models::NoteId;

/// Which screen the user should be looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Notes,
    Login,
}

/// Runs user actions end to end: send, feed the result back, and perform the
/// follow-up (one list refetch, or navigation to login).
#[derive(Debug)]
pub struct NotesController<A> {
    api: A,
    view: NotesView,
    route: Route,
}

impl<A: NotesApi> NotesController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            view: NotesView::new(),
            route: Route::Notes,
        }
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    pub const fn view(&self) -> &NotesView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut NotesView {
        &mut self.view
    }

    pub const fn route(&self) -> Route {
        self.route
    }

    /// Mount: fetch the current user's notes.
    pub async fn load(&mut self) {
        let result = self.api.list_notes().await;
        let effect = self.view.apply_list(result);
        self.follow(effect).await;
    }

    /// Confirm the open dialog.
    ///
    /// Returns whether the write itself succeeded; `false` also when nothing
    /// was sent. A failed refetch afterwards only leaves a notice.
    pub async fn save(&mut self) -> bool {
        let Some(mutation) = self.view.submit() else {
            return false;
        };
        self.dispatch(mutation).await
    }

    pub async fn remove(&mut self, id: &NoteId) -> bool {
        let mutation = self.view.delete(id);
        self.dispatch(mutation).await
    }

    pub async fn logout(&mut self) -> bool {
        let mutation = self.view.logout();
        self.dispatch(mutation).await
    }

    async fn dispatch(&mut self, mutation: Mutation) -> bool {
        let result = mutation.send(&self.api).await;
        let succeeded = result.is_ok();
        let effect = self.view.resolve(&mutation, result);
        self.follow(effect).await;
        succeeded
    }

    async fn follow(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Refresh => {
                let result = self.api.list_notes().await;
                if self.view.apply_list(result) == Effect::NavigateToLogin {
                    self.route = Route::Login;
                }
            }
            Effect::NavigateToLogin => self.route = Route::Login,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::api::{ApiError, ApiResult};
    use crate::models::{Note, NotePayload};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        List,
        Create(NotePayload),
        Update(NoteId, NotePayload),
        Delete(NoteId),
        Logout,
    }

    /// Records calls; each list returns the next scripted snapshot (or the
    /// current one), mutations return the next scripted result (or `Ok`).
    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<Call>>,
        lists: RefCell<VecDeque<ApiResult<Vec<Note>>>>,
        mutations: RefCell<VecDeque<ApiResult<()>>>,
    }

    impl FakeApi {
        fn with_lists(lists: Vec<ApiResult<Vec<Note>>>) -> Self {
            Self {
                lists: RefCell::new(lists.into()),
                ..Default::default()
            }
        }

        fn fail_next_mutation(&self, error: ApiError) {
            self.mutations.borrow_mut().push_back(Err(error));
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn next_mutation(&self, call: Call) -> ApiResult<()> {
            self.calls.borrow_mut().push(call);
            self.mutations.borrow_mut().pop_front().unwrap_or(Ok(()))
        }
    }

    impl NotesApi for FakeApi {
        async fn list_notes(&self) -> ApiResult<Vec<Note>> {
            self.calls.borrow_mut().push(Call::List);
            self.lists.borrow_mut().pop_front().unwrap_or(Ok(Vec::new()))
        }

        async fn create_note(&self, payload: &NotePayload) -> ApiResult<()> {
            self.next_mutation(Call::Create(payload.clone()))
        }

        async fn update_note(&self, id: &NoteId, payload: &NotePayload) -> ApiResult<()> {
            self.next_mutation(Call::Update(id.clone(), payload.clone()))
        }

        async fn delete_note(&self, id: &NoteId) -> ApiResult<()> {
            self.next_mutation(Call::Delete(id.clone()))
        }

        async fn logout(&self) -> ApiResult<()> {
            self.next_mutation(Call::Logout)
        }
    }

    fn note(id: &str, title: &str, content: &str) -> Note {
        Note {
            id: NoteId::new(id),
            title: title.to_string(),
            content: content.to_string(),
            created_at: "2025-03-14T09:26:53Z".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn load_renders_exactly_the_returned_sequence() {
        let notes = vec![note("2", "Second", ""), note("1", "First", "")];
        let mut controller = NotesController::new(FakeApi::with_lists(vec![Ok(notes.clone())]));

        controller.load().await;

        assert_eq!(controller.view().notes(), notes.as_slice());
        assert_eq!(controller.route(), Route::Notes);
    }

    #[tokio::test]
    async fn load_unauthorized_navigates_to_login_with_no_notes() {
        let mut controller =
            NotesController::new(FakeApi::with_lists(vec![Err(ApiError::Unauthorized)]));

        controller.load().await;

        assert_eq!(controller.route(), Route::Login);
        assert!(controller.view().notes().is_empty());
        assert_eq!(controller.api().calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn create_posts_then_refetches_once_and_clears_dialog() {
        let created = note("n1", "Groceries", "Milk, eggs");
        let mut controller = NotesController::new(FakeApi::with_lists(vec![
            Ok(Vec::new()),
            Ok(vec![created.clone()]),
        ]));
        controller.load().await;

        controller.view_mut().open_new();
        controller.view_mut().set_title("Groceries");
        controller.view_mut().set_content("Milk, eggs");
        assert!(controller.save().await);

        assert_eq!(
            controller.api().calls(),
            vec![
                Call::List,
                Call::Create(NotePayload::new("Groceries", "Milk, eggs")),
                Call::List,
            ]
        );
        assert!(!controller.view().is_dialog_open());
        assert_eq!(controller.view().notes(), &[created]);
    }

    #[tokio::test]
    async fn edit_updates_target_with_current_draft() {
        let original = note("x", "Draft", "old");
        let mut controller =
            NotesController::new(FakeApi::with_lists(vec![Ok(vec![original.clone()])]));
        controller.load().await;

        controller.view_mut().open_edit(&original);
        controller.view_mut().set_content("new");
        controller.save().await;

        assert_eq!(
            controller.api().calls()[1],
            Call::Update(NoteId::new("x"), NotePayload::new("Draft", "new"))
        );
        assert_eq!(
            controller.api().calls().iter().filter(|c| **c == Call::List).count(),
            2
        );
    }

    #[tokio::test]
    async fn cancelled_edit_then_new_issues_create() {
        let a = note("a", "A", "body");
        let mut controller = NotesController::new(FakeApi::with_lists(vec![Ok(vec![a.clone()])]));
        controller.load().await;

        controller.view_mut().open_edit(&a);
        controller.view_mut().close_dialog();
        controller.view_mut().open_new();
        assert_eq!(controller.view().dialog().unwrap().title(), "");
        controller.save().await;

        assert_eq!(
            controller.api().calls()[1],
            Call::Create(NotePayload::new("", ""))
        );
    }

    #[tokio::test]
    async fn failed_create_keeps_dialog_and_skips_refresh() {
        let mut controller = NotesController::new(FakeApi::default());
        controller
            .api()
            .fail_next_mutation(ApiError::Api("Internal Server Error (500)".to_string()));

        controller.view_mut().open_new();
        controller.view_mut().set_title("Groceries");
        assert!(!controller.save().await);

        assert_eq!(
            controller.api().calls(),
            vec![Call::Create(NotePayload::new("Groceries", ""))]
        );
        let dialog = controller.view().dialog().unwrap();
        assert_eq!(dialog.title(), "Groceries");
        assert!(!dialog.is_saving());
        assert!(controller.view().notice().is_some());
        assert_eq!(controller.route(), Route::Notes);
    }

    #[tokio::test]
    async fn save_without_open_dialog_sends_nothing() {
        let mut controller = NotesController::new(FakeApi::default());
        assert!(!controller.save().await);
        assert!(controller.api().calls().is_empty());
    }

    #[tokio::test]
    async fn delete_refetches_once() {
        let mut controller = NotesController::new(FakeApi::with_lists(vec![
            Ok(vec![note("a", "A", ""), note("b", "B", "")]),
            Ok(vec![note("b", "B", "")]),
        ]));
        controller.load().await;

        assert!(controller.remove(&NoteId::new("a")).await);

        assert_eq!(
            controller.api().calls(),
            vec![Call::List, Call::Delete(NoteId::new("a")), Call::List]
        );
        assert_eq!(controller.view().notes().len(), 1);
    }

    #[tokio::test]
    async fn unauthorized_delete_navigates_without_refetch() {
        let mut controller = NotesController::new(FakeApi::default());
        controller.api().fail_next_mutation(ApiError::Unauthorized);

        assert!(!controller.remove(&NoteId::new("a")).await);

        assert_eq!(controller.route(), Route::Login);
        assert_eq!(
            controller.api().calls(),
            vec![Call::Delete(NoteId::new("a"))]
        );
    }

    #[tokio::test]
    async fn refetch_unauthorized_after_mutation_navigates() {
        let mut controller =
            NotesController::new(FakeApi::with_lists(vec![Err(ApiError::Unauthorized)]));
        controller.remove(&NoteId::new("a")).await;
        assert_eq!(controller.route(), Route::Login);
    }

    #[tokio::test]
    async fn save_reports_success_when_only_the_refetch_fails() {
        let mut controller = NotesController::new(FakeApi::with_lists(vec![
            Ok(Vec::new()),
            Err(ApiError::Api("Service Unavailable (503)".to_string())),
        ]));
        controller.load().await;

        controller.view_mut().open_new();
        controller.view_mut().set_title("Groceries");

        assert!(controller.save().await);
        assert!(!controller.view().is_dialog_open());
        assert!(controller
            .view()
            .notice()
            .unwrap()
            .contains("Could not load notes"));
        assert_eq!(controller.route(), Route::Notes);
    }

    #[tokio::test]
    async fn logout_navigates_on_success_and_on_401() {
        let mut controller = NotesController::new(FakeApi::default());
        controller.logout().await;
        assert_eq!(controller.route(), Route::Login);

        let mut controller = NotesController::new(FakeApi::default());
        controller.api().fail_next_mutation(ApiError::Unauthorized);
        controller.logout().await;
        assert_eq!(controller.route(), Route::Login);
    }

    #[tokio::test]
    async fn logout_failure_leaves_user_on_notes() {
        let mut controller = NotesController::new(FakeApi::default());
        controller
            .api()
            .fail_next_mutation(ApiError::Api("HTTP 503".to_string()));

        assert!(!controller.logout().await);

        assert_eq!(controller.route(), Route::Notes);
        assert!(controller.view().notice().unwrap().contains("logging out"));
        assert_eq!(controller.api().calls(), vec![Call::Logout]);
    }
}
