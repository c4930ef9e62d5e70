use super::{
    repository::{read_file, AdminVenuesRepository, PendingUpload},
    utils::{EditorMode, VenueFormState},
};
use crate::{
    api::{ApiClient, ApiError, Page, Pagination, UploadedFile, Venue, VenueFilter, VenuePayload},
    pages::venues::utils::VenueFilterState,
    state::toast::{use_toaster, Toaster},
};
use leptos::*;

#[derive(Debug, Clone)]
pub struct SaveVenue {
    pub mode: EditorMode,
    pub payload: VenuePayload,
}

#[derive(Clone, Copy)]
pub struct AdminVenuesViewModel {
    pub filter: VenueFilterState,
    pub query: RwSignal<VenueFilter>,
    pub reload: RwSignal<u32>,
    pub venues: Resource<(VenueFilter, u32), Result<Page<Venue>, ApiError>>,
    pub editor: RwSignal<EditorMode>,
    pub form: VenueFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub save_action: Action<SaveVenue, Result<Venue, ApiError>>,
    pub delete_target: RwSignal<Option<Venue>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
    pub delete_error: RwSignal<Option<ApiError>>,
    pub upload_action: Action<PendingUpload, Result<UploadedFile, ApiError>>,
    toaster: Toaster,
}

impl AdminVenuesViewModel {
    pub fn apply_filters(&self) {
        self.query.set(self.filter.to_filter());
    }

    pub fn clear_filters(&self) {
        self.filter.reset();
        self.query.set(VenueFilter::default());
    }

    pub fn go_to_page(&self, page: u32) {
        self.query.update(|query| query.page = Some(page.max(1)));
    }

    pub fn pagination(&self) -> Signal<Option<Pagination>> {
        let venues = self.venues;
        Signal::derive(move || {
            venues
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

    pub fn open_edit(&self, venue: &Venue) {
        self.form.load(venue);
        self.error.set(None);
        self.editor.set(EditorMode::Edit(venue.id));
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
        match self.form.to_payload() {
            Ok(payload) => {
                self.error.set(None);
                self.save_action.dispatch(SaveVenue { mode, payload });
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    pub fn request_delete(&self, venue: Venue) {
        self.delete_error.set(None);
        self.delete_target.set(Some(venue));
    }

    pub fn cancel_delete(&self) {
        self.delete_error.set(None);
        self.delete_target.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(venue) = self.delete_target.get_untracked() {
            self.delete_error.set(None);
            self.delete_action.dispatch(venue.id);
        }
    }

    /// Reads the picked file and hands it to the upload action.
    pub fn upload(&self, file: web_sys::File) {
        let upload_action = self.upload_action;
        let toaster = self.toaster;
        spawn_local(async move {
            match read_file(file).await {
                Ok(pending) => upload_action.dispatch(pending),
                Err(err) => toaster.api_error(&err),
            }
        });
    }
}

pub fn apply_save_result(
    result: Option<Result<Venue, ApiError>>,
    editor: RwSignal<EditorMode>,
    error: RwSignal<Option<ApiError>>,
    reload: RwSignal<u32>,
    toaster: Toaster,
) {
    let Some(result) = result else {
        return;
    };
    match result {
        Ok(venue) => {
            toaster.success(format!("Escenario \"{}\" guardado.", venue.name));
            editor.set(EditorMode::Closed);
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
    delete_target: RwSignal<Option<Venue>>,
    delete_error: RwSignal<Option<ApiError>>,
    reload: RwSignal<u32>,
    toaster: Toaster,
) {
    let Some(result) = result else {
        return;
    };
    match result {
        Ok(()) => {
            toaster.success("Escenario eliminado.");
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

pub fn apply_upload_result(
    result: Option<Result<UploadedFile, ApiError>>,
    form: VenueFormState,
    toaster: Toaster,
) {
    match result {
        Some(Ok(file)) => {
            form.add_image(file.url);
            toaster.success("Imagen cargada.");
        }
        Some(Err(err)) => toaster.api_error(&err),
        None => {}
    }
}

pub fn use_admin_venues_view_model() -> AdminVenuesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminVenuesRepository::new(api);
    let toaster = use_toaster();

    let filter = VenueFilterState::default();
    let query = create_rw_signal(VenueFilter::default());
    let reload = create_rw_signal(0u32);
    let repo_for_list = repository.clone();
    let venues = create_resource(
        move || (query.get(), reload.get()),
        move |(filter, _)| {
            let repo = repo_for_list.clone();
            async move { repo.list(&filter).await }
        },
    );

    let editor = create_rw_signal(EditorMode::Closed);
    let form = VenueFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let delete_target = create_rw_signal(None::<Venue>);
    let delete_error = create_rw_signal(None::<ApiError>);

    let repo_for_save = repository.clone();
    let save_action = create_action(move |save: &SaveVenue| {
        let repo = repo_for_save.clone();
        let save = save.clone();
        async move { repo.save(save.mode, &save.payload).await }
    });
    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |id: &i64| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { repo.delete(id).await }
    });
    let repo_for_upload = repository;
    let upload_action = create_action(move |file: &PendingUpload| {
        let repo = repo_for_upload.clone();
        let file = file.clone();
        async move { repo.upload(file).await }
    });

    create_effect(move |_| {
        apply_save_result(save_action.value().get(), editor, error, reload, toaster);
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
    create_effect(move |_| {
        apply_upload_result(upload_action.value().get(), form, toaster);
    });

    AdminVenuesViewModel {
        filter,
        query,
        reload,
        venues,
        editor,
        form,
        error,
        save_action,
        delete_target,
        delete_action,
        delete_error,
        upload_action,
        toaster,
    }
}
