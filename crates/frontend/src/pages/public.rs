//! Public pages

use crate::branding::use_branding;
use folio_frontend_common::{use_auth, Notice, Route, Spinner};
use folio_http::types::{About, Education, Project, Settings};
use folio_http::{ApiClient, ClientError};
use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// Loading state of a resource fetched once on mount
#[derive(Clone)]
enum Load<T> {
    Loading,
    Ready(T),
    Failed,
}

/// Fetch a resource through the API client once per mount
#[hook]
fn use_resource<T, F, Fut>(fetch: F) -> Load<T>
where
    T: Clone + 'static,
    F: FnOnce(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let auth = use_auth();
    let state = use_state(|| Load::Loading);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let client = auth.client();
            spawn_local(async move {
                match fetch(client).await {
                    Ok(value) => state.set(Load::Ready(value)),
                    Err(error) => {
                        tracing::warn!(%error, "failed to load page content");
                        state.set(Load::Failed);
                    }
                }
            });
        });
    }

    (*state).clone()
}

#[derive(Properties, PartialEq)]
pub struct PublicShellProps {
    pub children: Children,
}

/// Header and footer around every public page
#[function_component(PublicShell)]
pub fn public_shell(props: &PublicShellProps) -> Html {
    let branding = use_branding();
    let current = use_route::<Route>();

    html! {
        <div class="min-h-screen flex flex-col bg-white">
            <header class="border-b border-gray-200">
                <nav class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                    <Link<Route> to={Route::Home} classes="text-2xl font-bold text-indigo-600">
                        {branding.logo_name.clone()}
                    </Link<Route>>
                    <div class="flex gap-6">
                        { for Route::PUBLIC_NAV.iter().map(|(route, label)| {
                            let class = if current.as_ref() == Some(route) {
                                "text-indigo-600 font-medium"
                            } else {
                                "text-gray-600 hover:text-gray-900"
                            };
                            html! {
                                <Link<Route> to={route.clone()} classes={class}>{*label}</Link<Route>>
                            }
                        }) }
                    </div>
                </nav>
            </header>
            <main class="flex-1 max-w-6xl w-full mx-auto px-4 py-10">
                {props.children.clone()}
            </main>
            <footer class="border-t border-gray-200 py-6 text-center text-sm text-gray-500">
                {format!("© {}", branding.person_name)}
            </footer>
        </div>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let branding = use_branding();

    html! {
        <section class="text-center py-20">
            <h1 class="text-4xl font-extrabold text-gray-900">{format!("Hi, I'm {}", branding.person_name)}</h1>
            <div class="mt-8 flex justify-center gap-4">
                <Link<Route> to={Route::Projects} classes="px-6 py-3 rounded-md text-white bg-indigo-600 hover:bg-indigo-700">
                    {"View Projects"}
                </Link<Route>>
                <Link<Route> to={Route::Contact} classes="px-6 py-3 rounded-md text-gray-700 bg-gray-100 hover:bg-gray-200">
                    {"Contact Me"}
                </Link<Route>>
            </div>
        </section>
    }
}

/// Lines under the degree, with the grade only when one is recorded
fn education_details(education: &Education) -> Vec<String> {
    let mut lines = vec![format!(
        "{} · {}",
        education.institution, education.graduation_year
    )];
    if !education.grade.trim().is_empty() {
        lines.push(format!("Grade: {}", education.grade));
    }
    lines
}

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let about = use_resource(|client| async move { client.get_about().await });

    let about: About = match about {
        Load::Loading => return html! { <Spinner /> },
        Load::Failed => return failed("Could not load this page."),
        Load::Ready(about) => about,
    };

    html! {
        <div class="space-y-10">
            <section>
                <h1 class="text-3xl font-bold mb-4">{"About Me"}</h1>
                <p class="text-gray-700 whitespace-pre-line">{about.summary.clone()}</p>
            </section>

            if !about.education.degree.is_empty() {
                <section>
                    <h2 class="text-2xl font-semibold mb-3">{"Education"}</h2>
                    <p class="font-medium">{about.education.degree.clone()}</p>
                    { for education_details(&about.education).into_iter().map(|line| html! {
                        <p class="text-gray-600">{line}</p>
                    }) }
                </section>
            }

            <section>
                <h2 class="text-2xl font-semibold mb-3">{"Experience"}</h2>
                { for about.experience.iter().map(|job| html! {
                    <div class="mb-4">
                        <h3 class="font-medium">{format!("{} at {}", job.title, job.company)}</h3>
                        <p class="text-sm text-gray-500">{job.duration.clone()}</p>
                        <ul class="list-disc ml-6 text-gray-700">
                            { for job.responsibilities.iter().map(|item| html! { <li>{item.clone()}</li> }) }
                        </ul>
                    </div>
                }) }
            </section>

            if !about.training.is_empty() {
                <section>
                    <h2 class="text-2xl font-semibold mb-3">{"Technical Training"}</h2>
                    { for about.training.iter().map(|course| html! {
                        <div class="mb-4">
                            <h3 class="font-medium">{course.title.clone()}</h3>
                            <p class="text-sm text-gray-500">{course.institution.clone()}</p>
                            if !course.skills.is_empty() {
                                <p class="text-sm text-indigo-600">{course.skills.join(" · ")}</p>
                            }
                        </div>
                    }) }
                </section>
            }

            <section>
                <h2 class="text-2xl font-semibold mb-3">{"Skills"}</h2>
                { for about.skills.iter().map(|skill| html! {
                    <p><span class="font-medium">{format!("{}: ", skill.category)}</span>{skill.items.clone()}</p>
                }) }
            </section>
        </div>
    }
}

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let auth = use_auth();
    let projects = use_resource(|client| async move { client.list_projects().await });

    let projects: Vec<Project> = match projects {
        Load::Loading => return html! { <Spinner /> },
        Load::Failed => return failed("Could not load projects."),
        Load::Ready(projects) => projects,
    };
    let client = auth.client();

    html! {
        <div>
            <h1 class="text-3xl font-bold mb-6">{"Projects"}</h1>
            if projects.is_empty() {
                <p class="text-gray-500">{"No projects yet."}</p>
            }
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                { for projects.iter().map(|project| html! {
                    <article key={project.id.clone()} class="border border-gray-200 rounded-lg overflow-hidden">
                        if let Some(image) = &project.image_url {
                            <img src={client.resolve_upload_url(image)} alt={project.title.clone()} class="w-full h-40 object-cover" />
                        }
                        <div class="p-4">
                            <h2 class="text-lg font-semibold">{project.title.clone()}</h2>
                            <p class="mt-2 text-gray-600">{project.description.clone()}</p>
                            <p class="mt-3 text-sm text-indigo-600">{project.technologies.join(" · ")}</p>
                            <div class="mt-3 flex gap-4 text-sm">
                                if let Some(url) = &project.live_url {
                                    <a href={url.clone()} target="_blank" rel="noopener noreferrer">{"Live"}</a>
                                }
                                if let Some(url) = &project.github_url {
                                    <a href={url.clone()} target="_blank" rel="noopener noreferrer">{"Source"}</a>
                                }
                            </div>
                        </div>
                    </article>
                }) }
            </div>
        </div>
    }
}

/// `(label, value)` rows of the contact page, skipping blank values
fn contact_rows(settings: &Settings) -> Vec<(&'static str, String)> {
    [
        ("Email", &settings.email),
        ("Phone", &settings.phone),
        ("Location", &settings.location),
        ("LinkedIn", &settings.linkedin),
        ("GitHub", &settings.github),
        ("Twitter", &settings.twitter),
        ("Instagram", &settings.instagram),
    ]
    .into_iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .map(|(label, value)| (label, value.clone()))
    .collect()
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let settings = use_resource(|client| async move { client.get_settings().await });

    let settings: Settings = match settings {
        Load::Loading => return html! { <Spinner /> },
        Load::Failed => return failed("Could not load contact details."),
        Load::Ready(settings) => settings,
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold mb-6">{"Contact"}</h1>
            <dl class="space-y-3">
                { for contact_rows(&settings).into_iter().map(|(label, value)| html! {
                    <div class="flex gap-4">
                        <dt class="w-28 font-medium text-gray-700">{label}</dt>
                        <dd class="text-gray-600">{value}</dd>
                    </div>
                }) }
            </dl>
            if !settings.resume_url.is_empty() {
                <a href={settings.resume_url.clone()} target="_blank" rel="noopener noreferrer"
                    class="inline-block mt-8 px-6 py-3 rounded-md text-white bg-indigo-600 hover:bg-indigo-700">
                    {"Download Resume"}
                </a>
            }
        </div>
    }
}

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    html! {
        <div>
            <h1 class="text-3xl font-bold mb-6">{"Services"}</h1>
            <p class="text-gray-600">
                {"Get in touch through the "}
                <Link<Route> to={Route::Contact} classes="text-indigo-600">{"contact page"}</Link<Route>>
                {" to discuss a project."}
            </p>
        </div>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="text-center py-20">
            <h1 class="text-4xl font-bold text-gray-900">{"404"}</h1>
            <p class="mt-2 text-gray-600">{"Page not found"}</p>
            <Link<Route> to={Route::Home} classes="mt-6 inline-block text-indigo-600">{"Back to Home"}</Link<Route>>
        </div>
    }
}

fn failed(message: &str) -> Html {
    html! { <Notice message={message.to_string()} /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_rows_skip_blank_values() {
        let settings = Settings {
            email: "me@example.com".into(),
            phone: " ".into(),
            github: "https://github.com/me".into(),
            ..Settings::default()
        };

        let rows = contact_rows(&settings);
        assert_eq!(
            rows,
            vec![
                ("Email", "me@example.com".to_string()),
                ("GitHub", "https://github.com/me".to_string()),
            ]
        );
    }

    #[test]
    fn test_education_details_show_grade_when_set() {
        let mut education = Education {
            degree: "BSc Computer Science".into(),
            institution: "State University".into(),
            grade: "First Class".into(),
            graduation_year: "2019".into(),
        };
        assert_eq!(
            education_details(&education),
            vec!["State University · 2019", "Grade: First Class"]
        );

        education.grade = String::new();
        assert_eq!(education_details(&education), vec!["State University · 2019"]);
    }
}
