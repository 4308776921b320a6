use contracts::domain::common::{Resource, ResourceDef, Tr};
use contracts::shared::api_error::{ApiError, Operation};
use contracts::shared::form_draft::{submit_plan, FormDraft, FormError, SubmitPlan};
use contracts::shared::i18n;
use contracts::shared::urls::routes;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::shared::resource_client::ResourceClient;

/// ViewModel for the create / edit form of `T`
pub struct ResourceFormViewModel<T: Resource> {
    client: StoredValue<ResourceClient<T>>,
    /// `None` on create
    pub id: Option<i64>,
    pub draft: RwSignal<FormDraft>,
    /// Newly chosen file for the image field, not uploaded yet
    pub file: RwSignal<Option<File>, LocalStorage>,
    pub error: RwSignal<Option<Tr>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    /// Route to open once the record is saved
    pub saved_to: RwSignal<Option<String>>,
}

impl<T: Resource> Clone for ResourceFormViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Resource> Copy for ResourceFormViewModel<T> {}

impl<T: Resource> ResourceFormViewModel<T> {
    pub fn new(client: ResourceClient<T>, id: Option<i64>) -> Self {
        Self {
            client: StoredValue::new(client),
            id,
            draft: RwSignal::new(FormDraft::empty(T::def())),
            file: RwSignal::new_local(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            saved_to: RwSignal::new(None),
        }
    }

    pub fn def(&self) -> &'static ResourceDef {
        T::def()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Fetch the record into the draft when editing
    pub fn load_if_needed(&self) {
        let Some(id) = self.id else {
            return;
        };
        let vm = *self;
        let client = self.client.get_value();
        vm.loading.set(true);

        spawn_local(async move {
            match client.get(id).await {
                Ok(record) => match FormDraft::from_record(T::def(), &record) {
                    Ok(draft) => vm.draft.set(draft),
                    Err(e) => {
                        log::error!("{} #{} cannot be edited: {}", T::path(), id, e);
                        vm.error.set(Some(i18n::form_error(&e)));
                    }
                },
                Err(e) => vm.fail(Operation::Load, &e),
            }
            vm.loading.set(false);
        });
    }

    /// Validate, send, and on success set `saved_to`.
    ///
    /// Ignored while a save is running. Missing required fields stop the
    /// submit before any request goes out.
    pub fn save_command(&self) {
        if self.saving.get_untracked() {
            return;
        }

        let def = T::def();
        let draft = self.draft.get_untracked();
        let file = self.file.get_untracked();

        let checked = draft
            .validate(def, file.is_some())
            .and_then(|_| draft.to_record::<T>(def, self.id).map(|_| ()));
        if let Err(e) = checked {
            log::warn!("{} form rejected: {}", def.path, e);
            self.error.set(Some(i18n::form_error(&e)));
            return;
        }

        let vm = *self;
        let client = self.client.get_value();
        vm.error.set(None);
        vm.saving.set(true);

        spawn_local(async move {
            match submit(&client, vm.id, draft, file).await {
                Ok(()) => {
                    log::info!("saved {} {:?}", def.path, vm.id);
                    vm.file.set(None);
                    let target = match vm.id {
                        Some(id) => routes::view(def.kind, id),
                        None => routes::list(def.kind),
                    };
                    vm.saved_to.set(Some(target));
                }
                Err(SaveError::Form(e)) => {
                    log::error!("{} payload rejected: {}", def.path, e);
                    vm.error.set(Some(i18n::form_error(&e)));
                }
                Err(SaveError::Api(e)) => vm.fail(Operation::Save, &e),
            }
            vm.saving.set(false);
        });
    }

    fn fail(&self, op: Operation, err: &ApiError) {
        log::error!("{:?} of {} failed: {}", op, T::path(), err);
        // the session redirect takes over
        if !err.requires_login() {
            self.error.set(Some(i18n::error_for(op)));
        }
    }
}

enum SaveError {
    Form(FormError),
    Api(ApiError),
}

impl From<FormError> for SaveError {
    fn from(e: FormError) -> Self {
        SaveError::Form(e)
    }
}

impl From<ApiError> for SaveError {
    fn from(e: ApiError) -> Self {
        SaveError::Api(e)
    }
}

async fn submit<T: Resource>(
    client: &ResourceClient<T>,
    id: Option<i64>,
    mut draft: FormDraft,
    file: Option<File>,
) -> Result<(), SaveError> {
    let def = T::def();
    let plan = submit_plan(def, id, file.is_some());

    match (plan, id, file) {
        (SubmitPlan::CreateJson, _, _) => {
            let record: T = draft.to_record(def, None)?;
            client.create(&record).await?;
        }
        (SubmitPlan::CreateMultipart, _, Some(file)) => {
            let record: T = draft.to_record(def, None)?;
            client.create_multipart(&record, &file).await?;
        }
        (SubmitPlan::Update, Some(id), _) => {
            let record: T = draft.to_record(def, Some(id))?;
            client.update(id, &record).await?;
        }
        (SubmitPlan::UploadThenUpdate, Some(id), Some(file)) => {
            let filename = client.upload(&file).await?;
            draft.apply_upload(def, Some(filename));
            let record: T = draft.to_record(def, Some(id))?;
            client.update(id, &record).await?;
        }
        (plan, id, _) => {
            return Err(SaveError::Form(FormError::Shape(format!(
                "no request for {:?} with id {:?}",
                plan, id
            ))));
        }
    }
    Ok(())
}
