//! Admin overview

use folio_frontend_common::{use_auth, Route, Spinner};
use folio_http::types::{Project, Settings};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

const RECENT_PROJECTS: usize = 3;
const PREVIEW_CHARS: usize = 80;

/// Counters shown at the top of the dashboard
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub projects: usize,
    pub featured: usize,
    pub links_configured: usize,
}

impl DashboardStats {
    pub fn new(projects: &[Project], settings: &Settings) -> Self {
        Self {
            projects: projects.len(),
            featured: projects.iter().filter(|project| project.featured).count(),
            links_configured: settings.configured_count(),
        }
    }
}

/// Most recently added projects, newest first
///
/// The backend lists projects in insertion order.
pub fn recent_projects(projects: &[Project]) -> Vec<Project> {
    projects
        .iter()
        .rev()
        .take(RECENT_PROJECTS)
        .cloned()
        .collect()
}

/// First characters of a description, with an ellipsis when cut
pub fn preview(description: &str) -> String {
    let mut chars = description.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[derive(Clone, PartialEq, Default)]
struct Overview {
    stats: DashboardStats,
    recent: Vec<Project>,
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_auth();
    let overview = use_state(|| None::<Overview>);

    {
        let overview = overview.clone();
        use_effect_with((), move |_| {
            let client = auth.client();
            spawn_local(async move {
                let projects = client.list_projects().await;
                let settings = client.get_settings().await;

                let loaded = match (projects, settings) {
                    (Ok(projects), Ok(settings)) => Overview {
                        stats: DashboardStats::new(&projects, &settings),
                        recent: recent_projects(&projects),
                    },
                    (projects, settings) => {
                        if let Err(error) = &projects {
                            tracing::error!(%error, "failed to fetch projects");
                        }
                        if let Err(error) = &settings {
                            tracing::error!(%error, "failed to fetch settings");
                        }
                        Overview::default()
                    }
                };
                overview.set(Some(loaded));
            });
        });
    }

    let Some(overview) = (*overview).clone() else {
        return html! { <Spinner /> };
    };
    let stats = &overview.stats;

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-gray-900">{"Dashboard"}</h1>
                <p class="text-gray-600">{"Welcome back! Here's an overview of your portfolio."}</p>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                {stat_card(stats.projects, "Total Projects")}
                {stat_card(stats.featured, "Featured Projects")}
                {stat_card(stats.links_configured, "Links Configured")}
            </div>

            <div>
                <h2 class="text-lg font-semibold mb-3">{"Quick Actions"}</h2>
                <div class="flex gap-4">
                    <Link<Route> to={Route::AdminProjects} classes="px-4 py-3 bg-white rounded-lg shadow hover:shadow-md">
                        {"Add New Project"}
                    </Link<Route>>
                    <Link<Route> to={Route::AdminSettings} classes="px-4 py-3 bg-white rounded-lg shadow hover:shadow-md">
                        {"Update Settings"}
                    </Link<Route>>
                </div>
            </div>

            <div>
                <h2 class="text-lg font-semibold mb-3">{"Recent Projects"}</h2>
                if overview.recent.is_empty() {
                    <p class="text-gray-500">{"No projects yet. Start by adding your first project!"}</p>
                } else {
                    <div class="space-y-3">
                        { for overview.recent.iter().map(|project| html! {
                            <div key={project.id.clone()} class="p-4 bg-white rounded-lg shadow flex justify-between items-start">
                                <div>
                                    <h4 class="font-medium">{project.title.clone()}</h4>
                                    <p class="text-sm text-gray-600">{preview(&project.description)}</p>
                                </div>
                                if project.featured {
                                    <span class="px-2 py-1 text-xs rounded-full bg-indigo-100 text-indigo-700">{"Featured"}</span>
                                }
                            </div>
                        }) }
                    </div>
                }
            </div>
        </div>
    }
}

fn stat_card(value: usize, label: &str) -> Html {
    html! {
        <div class="p-6 bg-white rounded-lg shadow">
            <h3 class="text-3xl font-bold text-gray-900">{value.to_string()}</h3>
            <p class="text-gray-600">{label.to_string()}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, featured: bool) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            featured,
            ..Project::default()
        }
    }

    #[test]
    fn test_stats_count_featured_and_configured_links() {
        let projects = vec![project("1", true), project("2", false), project("3", true)];
        let settings = Settings {
            email: "me@example.com".into(),
            github: "https://github.com/me".into(),
            ..Settings::default()
        };

        let stats = DashboardStats::new(&projects, &settings);
        assert_eq!(
            stats,
            DashboardStats {
                projects: 3,
                featured: 2,
                links_configured: 2,
            }
        );
    }

    #[test]
    fn test_recent_projects_are_last_three_newest_first() {
        let projects: Vec<Project> = ["1", "2", "3", "4", "5"]
            .iter()
            .map(|id| project(id, false))
            .collect();

        let ids: Vec<String> = recent_projects(&projects)
            .into_iter()
            .map(|project| project.id)
            .collect();
        assert_eq!(ids, vec!["5", "4", "3"]);
    }

    #[test]
    fn test_recent_projects_with_fewer_than_three() {
        let projects = vec![project("1", false)];
        assert_eq!(recent_projects(&projects).len(), 1);
        assert!(recent_projects(&[]).is_empty());
    }

    #[test]
    fn test_preview_truncates_long_descriptions() {
        let long = "a".repeat(100);
        let shown = preview(&long);
        assert_eq!(shown, format!("{}...", "a".repeat(80)));

        assert_eq!(preview("short"), "short");
        assert_eq!(preview(&"é".repeat(80)), "é".repeat(80));
    }
}
