use super::{
    repository::{AdminUsersRepository, UserQuery},
    utils::{EditorMode, UserFormState},
};
use crate::{
    api::{ApiClient, ApiError, Page, Pagination, UserPayload, UserProfile},
    state::{
        session::use_session,
        toast::{use_toaster, Toaster},
    },
};
use leptos::*;

#[derive(Debug, Clone)]
pub struct SaveUser {
    pub mode: EditorMode,
    pub payload: UserPayload,
}

#[derive(Clone, Copy)]
pub struct AdminUsersViewModel {
    pub search: RwSignal<String>,
    pub query: RwSignal<UserQuery>,
    pub reload: RwSignal<u32>,
    pub users: Resource<(UserQuery, u32), Result<Page<UserProfile>, ApiError>>,
    pub editor: RwSignal<EditorMode>,
    pub form: UserFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub save_action: Action<SaveUser, Result<UserProfile, ApiError>>,
    pub delete_target: RwSignal<Option<UserProfile>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
    pub delete_error: RwSignal<Option<ApiError>>,
    pub current_user_id: Signal<Option<i64>>,
    toaster: Toaster,
}

impl AdminUsersViewModel {
    pub fn apply_search(&self) {
        let search = self.search.get_untracked();
        let search = search.trim();
        self.query.set(UserQuery {
            page: Some(1),
            search: (!search.is_empty()).then(|| search.to_string()),
        });
    }

    pub fn clear_search(&self) {
        self.search.set(String::new());
        self.query.set(UserQuery::default());
    }

    pub fn go_to_page(&self, page: u32) {
        self.query.update(|query| query.page = Some(page.max(1)));
    }

    pub fn pagination(&self) -> Signal<Option<Pagination>> {
        let users = self.users;
        Signal::derive(move || {
            users
                .get()
                .and_then(|result| result.ok())
                .map(|page| page.pagination)
        })
    }

    pub fn open_create(&self) {
        self.form.reset();
        self.error.set(None);
        self.editor.set(EditorMode::Create);
    }

    pub fn open_edit(&self, user: &UserProfile) {
        self.form.load(user);
        self.error.set(None);
        self.editor.set(EditorMode::Edit(user.id));
    }

    pub fn close_editor(&self) {
        self.editor.set(EditorMode::Closed);
        self.error.set(None);
    }

    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let mode = self.editor.get_untracked();
        if !mode.is_open() {
            return;
        }
        match self.form.to_payload(mode) {
            Ok(payload) => {
                self.error.set(None);
                self.save_action.dispatch(SaveUser { mode, payload });
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    /// Administrators cannot delete their own account from here.
    pub fn request_delete(&self, user: UserProfile) {
        if self.current_user_id.get_untracked() == Some(user.id) {
            self.toaster.error("No puedes eliminar tu propia cuenta.");
            return;
        }
        self.delete_error.set(None);
        self.delete_target.set(Some(user));
    }

    pub fn cancel_delete(&self) {
        self.delete_error.set(None);
        self.delete_target.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(user) = self.delete_target.get_untracked() {
            self.delete_error.set(None);
            self.delete_action.dispatch(user.id);
        }
    }
}

pub fn apply_save_result(
    result: Option<Result<UserProfile, ApiError>>,
    editor: RwSignal<EditorMode>,
    form: UserFormState,
    error: RwSignal<Option<ApiError>>,
    reload: RwSignal<u32>,
    toaster: Toaster,
) {
    let Some(result) = result else {
        return;
    };
    match result {
        Ok(user) => {
            toaster.success(format!("Usuario \"{}\" guardado.", user.display_name()));
            editor.set(EditorMode::Closed);
            form.password.set(String::new());
            error.set(None);
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Err(err) => {
            toaster.api_error(&err);
            error.set(Some(err));
        }
    }
}

pub fn apply_delete_result(
    result: Option<Result<(), ApiError>>,
    delete_target: RwSignal<Option<UserProfile>>,
    delete_error: RwSignal<Option<ApiError>>,
    reload: RwSignal<u32>,
    toaster: Toaster,
) {
    let Some(result) = result else {
        return;
    };
    match result {
        Ok(()) => {
            toaster.success("Usuario eliminado.");
            delete_error.set(None);
            delete_target.set(None);
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Err(err) => {
            toaster.api_error(&err);
            delete_error.set(Some(err));
        }
    }
}

pub fn use_admin_users_view_model() -> AdminUsersViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminUsersRepository::new(api);
    let toaster = use_toaster();
    let phase = use_session().phase();
    let current_user_id =
        Signal::derive(move || phase.with(|phase| phase.user().map(|user| user.id)));

    let search = create_rw_signal(String::new());
    let query = create_rw_signal(UserQuery::default());
    let reload = create_rw_signal(0u32);
    let repo_for_list = repository.clone();
    let users = create_resource(
        move || (query.get(), reload.get()),
        move |(query, _)| {
            let repo = repo_for_list.clone();
            async move { repo.list(&query).await }
        },
    );

    let editor = create_rw_signal(EditorMode::Closed);
    let form = UserFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let delete_target = create_rw_signal(None::<UserProfile>);
    let delete_error = create_rw_signal(None::<ApiError>);

    let repo_for_save = repository.clone();
    let save_action = create_action(move |save: &SaveUser| {
        let repo = repo_for_save.clone();
        let save = save.clone();
        async move { repo.save(save.mode, &save.payload).await }
    });
    let repo_for_delete = repository;
    let delete_action = create_action(move |id: &i64| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { repo.delete(id).await }
    });

    create_effect(move |_| {
        apply_save_result(save_action.value().get(), editor, form, error, reload, toaster);
    });
    create_effect(move |_| {
        apply_delete_result(
            delete_action.value().get(),
            delete_target,
            delete_error,
            reload,
            toaster,
        );
    });

    AdminUsersViewModel {
        search,
        query,
        reload,
        users,
        editor,
        form,
        error,
        save_action,
        delete_target,
        delete_action,
        delete_error,
        current_user_id,
        toaster,
    }
}
