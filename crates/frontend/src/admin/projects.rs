//! Project management

use super::{failure_message, Editing};
use crate::forms::{
    reduce_input, reduce_textarea, DANGER_BUTTON, EDIT_BUTTON, INPUT_CLASS, PRIMARY_BUTTON,
};
use folio_frontend_common::{use_auth, Notice, NoticeKind, Spinner};
use folio_http::client::upload::ImageUpload;
use folio_http::types::{Project, ProjectInput};
use folio_http::ApiClient;
use gloo::dialogs::confirm;
use gloo::file::futures::read_as_bytes;
use gloo::file::File;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Editable copy of a project, technologies kept as typed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub image_url: String,
    pub live_url: String,
    pub github_url: String,
    pub featured: bool,
}

impl From<&Project> for ProjectForm {
    fn from(project: &Project) -> Self {
        let input = ProjectInput::from(project);
        Self {
            title: input.title,
            description: input.description,
            technologies: input.technologies.join(", "),
            image_url: input.image_url,
            live_url: input.live_url,
            github_url: input.github_url,
            featured: input.featured,
        }
    }
}

impl ProjectForm {
    /// Validate the form into the body sent to the backend
    pub fn to_input(&self) -> Result<ProjectInput, &'static str> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err("Title and description are required");
        }

        Ok(ProjectInput {
            title: self.title.clone(),
            description: self.description.clone(),
            technologies: ProjectInput::parse_technologies(&self.technologies),
            image_url: self.image_url.clone(),
            live_url: self.live_url.clone(),
            github_url: self.github_url.clone(),
            featured: self.featured,
        })
    }
}

/// Edits applied to the project form
///
/// Dispatched through a reducer so that results arriving after an await
/// (an image upload) land on the form as it is then, not as it was rendered.
#[derive(Debug)]
pub enum FormAction {
    Reset(ProjectForm),
    Title(String),
    Description(String),
    Technologies(String),
    ImageUrl(String),
    LiveUrl(String),
    GithubUrl(String),
    Featured(bool),
}

impl Reducible for ProjectForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Reset(form) => return Rc::new(form),
            FormAction::Title(v) => next.title = v,
            FormAction::Description(v) => next.description = v,
            FormAction::Technologies(v) => next.technologies = v,
            FormAction::ImageUrl(v) => next.image_url = v,
            FormAction::LiveUrl(v) => next.live_url = v,
            FormAction::GithubUrl(v) => next.github_url = v,
            FormAction::Featured(v) => next.featured = v,
        }
        Rc::new(next)
    }
}

type Status = Option<(NoticeKind, String)>;

fn reload(
    client: ApiClient,
    projects: UseStateHandle<Option<Vec<Project>>>,
    status: UseStateHandle<Status>,
) {
    spawn_local(async move {
        match client.list_projects().await {
            Ok(list) => projects.set(Some(list)),
            Err(error) => {
                tracing::error!(%error, "failed to fetch projects");
                projects.set(Some(Vec::new()));
                status.set(Some((NoticeKind::Error, "Failed to fetch projects".into())));
            }
        }
    });
}

#[function_component(ProjectsEditor)]
pub fn projects_editor() -> Html {
    let auth = use_auth();
    let projects = use_state(|| None::<Vec<Project>>);
    let editing = use_state(|| None::<Editing>);
    let form = use_reducer(ProjectForm::default);
    let uploading = use_state(|| false);
    let status = use_state(|| Status::None);

    {
        let client = auth.client();
        let projects = projects.clone();
        let status = status.clone();
        use_effect_with((), move |_| reload(client, projects, status));
    }

    let open_new = {
        let editing = editing.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            form.dispatch(FormAction::Reset(ProjectForm::default()));
            editing.set(Some(Editing::New));
        })
    };

    let close = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(None))
    };

    let on_submit = {
        let client = auth.client();
        let projects = projects.clone();
        let editing = editing.clone();
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = match form.to_input() {
                Ok(input) => input,
                Err(message) => {
                    status.set(Some((NoticeKind::Error, message.to_string())));
                    return;
                }
            };
            let Some(target) = (*editing).clone() else {
                return;
            };

            let client = client.clone();
            let projects = projects.clone();
            let editing = editing.clone();
            let status = status.clone();
            spawn_local(async move {
                let (result, done) = match &target {
                    Editing::New => (
                        client.create_project(&input).await,
                        "Project created successfully!",
                    ),
                    Editing::Existing(id) => (
                        client.update_project(id, &input).await,
                        "Project updated successfully!",
                    ),
                };
                match result {
                    Ok(()) => {
                        status.set(Some((NoticeKind::Success, done.into())));
                        editing.set(None);
                        reload(client, projects, status);
                    }
                    Err(error) => status.set(Some((
                        NoticeKind::Error,
                        failure_message(&error, "Failed to save project"),
                    ))),
                }
            });
        })
    };

    let on_image = {
        let client = auth.client();
        let form = form.clone();
        let uploading = uploading.clone();
        let status = status.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let file = File::from(file);

            let client = client.clone();
            let form = form.clone();
            let uploading = uploading.clone();
            let status = status.clone();
            uploading.set(true);
            spawn_local(async move {
                let upload = match read_as_bytes(&file).await {
                    Ok(bytes) => ImageUpload::new(file.name(), file.raw_mime_type(), bytes),
                    Err(error) => {
                        tracing::warn!(%error, "failed to read selected image");
                        uploading.set(false);
                        status.set(Some((NoticeKind::Error, "Failed to upload image".into())));
                        return;
                    }
                };

                let result = match upload {
                    Ok(image) => client.upload_image(image).await,
                    Err(error) => Err(error),
                };
                match result {
                    Ok(uploaded) => {
                        form.dispatch(FormAction::ImageUrl(uploaded.image_url));
                        status.set(Some((NoticeKind::Success, "Image uploaded successfully!".into())));
                    }
                    Err(error) => status.set(Some((
                        NoticeKind::Error,
                        failure_message(&error, "Failed to upload image"),
                    ))),
                }
                uploading.set(false);
            });
        })
    };

    let Some(list) = (*projects).clone() else {
        return html! { <Spinner /> };
    };
    let client = auth.client();

    let rows = list.iter().map(|project| {
        let on_edit = {
            let editing = editing.clone();
            let form = form.clone();
            let project = project.clone();
            Callback::from(move |_: MouseEvent| {
                form.dispatch(FormAction::Reset(ProjectForm::from(&project)));
                editing.set(Some(Editing::Existing(project.id.clone())));
            })
        };
        let on_delete = {
            let client = client.clone();
            let projects = projects.clone();
            let status = status.clone();
            let id = project.id.clone();
            Callback::from(move |_: MouseEvent| {
                if !confirm("Are you sure you want to delete this project?") {
                    return;
                }
                let client = client.clone();
                let projects = projects.clone();
                let status = status.clone();
                let id = id.clone();
                spawn_local(async move {
                    match client.delete_project(&id).await {
                        Ok(()) => {
                            status.set(Some((NoticeKind::Success, "Project deleted successfully!".into())));
                            reload(client, projects, status);
                        }
                        Err(error) => {
                            tracing::error!(%error, id = %id, "failed to delete project");
                            status.set(Some((NoticeKind::Error, "Failed to delete project".into())));
                        }
                    }
                });
            })
        };

        html! {
            <div key={project.id.clone()} class="p-4 bg-white rounded-lg shadow flex gap-4 items-start">
                if let Some(image) = &project.image_url {
                    <img src={client.resolve_upload_url(image)} alt={project.title.clone()} class="w-24 h-16 object-cover rounded" />
                }
                <div class="flex-1">
                    <h3 class="font-medium">{project.title.clone()}</h3>
                    <p class="text-sm text-gray-600">{project.technologies.join(", ")}</p>
                </div>
                if project.featured {
                    <span class="px-2 py-1 text-xs rounded-full bg-indigo-100 text-indigo-700">{"Featured"}</span>
                }
                <button onclick={on_edit} class={EDIT_BUTTON}>{"Edit"}</button>
                <button onclick={on_delete} class={DANGER_BUTTON}>{"Delete"}</button>
            </div>
        }
    });

    let (kind, message) = match &*status {
        Some((kind, message)) => (*kind, Some(message.clone())),
        None => (NoticeKind::Error, None),
    };

    html! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{"Projects"}</h1>
                    <p class="text-gray-600">{"Manage your portfolio projects"}</p>
                </div>
                <button onclick={open_new} class={PRIMARY_BUTTON}>{"Add Project"}</button>
            </div>

            <Notice {kind} {message} />

            if let Some(target) = &*editing {
                <form onsubmit={on_submit} class="p-6 bg-white rounded-lg shadow space-y-4">
                    <h2 class="text-lg font-semibold">
                        {if *target == Editing::New { "New Project" } else { "Edit Project" }}
                    </h2>
                    <input class={INPUT_CLASS} placeholder="Title" value={form.title.clone()}
                        oninput={reduce_input(&form, FormAction::Title)} />
                    <textarea class={INPUT_CLASS} placeholder="Description" rows="4" value={form.description.clone()}
                        oninput={reduce_textarea(&form, FormAction::Description)} />
                    <input class={INPUT_CLASS} placeholder="Technologies (comma separated)" value={form.technologies.clone()}
                        oninput={reduce_input(&form, FormAction::Technologies)} />
                    <div class="flex gap-4 items-center">
                        <input class={INPUT_CLASS} placeholder="Image URL" value={form.image_url.clone()}
                            oninput={reduce_input(&form, FormAction::ImageUrl)} />
                        <label class="whitespace-nowrap text-sm text-indigo-600 cursor-pointer">
                            {if *uploading { "Uploading..." } else { "Upload image" }}
                            <input type="file" accept="image/*" class="hidden" onchange={on_image} disabled={*uploading} />
                        </label>
                    </div>
                    if !form.image_url.is_empty() {
                        <img src={client.resolve_upload_url(&form.image_url)} alt="Preview" class="w-40 h-24 object-cover rounded" />
                    }
                    <input class={INPUT_CLASS} placeholder="Live URL" value={form.live_url.clone()}
                        oninput={reduce_input(&form, FormAction::LiveUrl)} />
                    <input class={INPUT_CLASS} placeholder="GitHub URL" value={form.github_url.clone()}
                        oninput={reduce_input(&form, FormAction::GithubUrl)} />
                    <label class="flex gap-2 items-center text-sm">
                        <input type="checkbox" checked={form.featured}
                            onchange={{
                                let form = form.clone();
                                Callback::from(move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    form.dispatch(FormAction::Featured(input.checked()));
                                })
                            }} />
                        {"Featured project"}
                    </label>
                    <div class="flex gap-3">
                        <button type="submit" class={PRIMARY_BUTTON}>{"Save"}</button>
                        <button type="button" onclick={close} class={EDIT_BUTTON}>{"Cancel"}</button>
                    </div>
                </form>
            }

            if list.is_empty() {
                <p class="text-gray-500">{"No projects yet."}</p>
            }
            <div class="space-y-3">
                { for rows }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_description_are_required() {
        let form = ProjectForm {
            title: "Folio".into(),
            description: "  ".into(),
            ..ProjectForm::default()
        };
        assert_eq!(form.to_input(), Err("Title and description are required"));
    }

    #[test]
    fn test_technologies_are_split_on_submit() {
        let form = ProjectForm {
            title: "Folio".into(),
            description: "Portfolio site".into(),
            technologies: "Rust, Yew, ,wasm ".into(),
            featured: true,
            ..ProjectForm::default()
        };

        let input = form.to_input().unwrap();
        assert_eq!(input.technologies, vec!["Rust", "Yew", "wasm"]);
        assert!(input.featured);
    }

    #[test]
    fn test_editing_existing_project_joins_technologies() {
        let project = Project {
            id: "1".into(),
            title: "Folio".into(),
            description: "Portfolio site".into(),
            technologies: vec!["Rust".into(), "Yew".into()],
            image_url: Some("/uploads/a.png".into()),
            ..Project::default()
        };

        let form = ProjectForm::from(&project);
        assert_eq!(form.technologies, "Rust, Yew");
        assert_eq!(form.image_url, "/uploads/a.png");
        assert_eq!(form.live_url, "");
    }

    #[test]
    fn test_uploaded_image_keeps_fields_typed_meanwhile() {
        let opened = Rc::new(ProjectForm::default());
        let typed = opened
            .reduce(FormAction::Title("Folio".into()))
            .reduce(FormAction::Description("Typed during upload".into()));

        let uploaded = typed.reduce(FormAction::ImageUrl("/uploads/a.png".into()));

        assert_eq!(uploaded.title, "Folio");
        assert_eq!(uploaded.description, "Typed during upload");
        assert_eq!(uploaded.image_url, "/uploads/a.png");
    }

    #[test]
    fn test_reset_replaces_the_whole_form() {
        let typed = Rc::new(ProjectForm::default()).reduce(FormAction::Featured(true));
        let reset = typed.reduce(FormAction::Reset(ProjectForm::default()));
        assert_eq!(*reset, ProjectForm::default());
    }
}
