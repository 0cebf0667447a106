//! About page content editor

use super::{failure_message, Editing};
use crate::forms::{
    bind_input, bind_textarea, update_field, DANGER_BUTTON, EDIT_BUTTON, INPUT_CLASS, PRIMARY_BUTTON,
};
use folio_frontend_common::{use_auth, Notice, NoticeKind, Spinner};
use folio_http::types::{About, Experience, SkillCategory, Training};
use folio_http::{ApiClient, ClientError};
use gloo::dialogs::confirm;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

/// Append an empty skill category with an id unused by the others
pub fn add_skill(skills: &mut Vec<SkillCategory>) {
    let used: Vec<u64> = skills
        .iter()
        .filter_map(|skill| skill.id.strip_prefix("skill-")?.parse().ok())
        .collect();
    // past the largest number, or the lowest free one when that overflows
    let next = used
        .iter()
        .max()
        .map_or(Some(1), |max| max.checked_add(1))
        .or_else(|| (1..).find(|n| !used.contains(n)))
        .unwrap_or(1);

    skills.push(SkillCategory {
        id: format!("skill-{next}"),
        ..SkillCategory::default()
    });
}

/// Split a multi-line text area into trimmed, non-blank entries
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Form copy of an experience entry, responsibilities one per line
pub fn job_draft(job: &Experience) -> (Experience, String) {
    (job.clone(), job.responsibilities.join("\n"))
}

/// Form copy of a training entry, skills comma separated
pub fn course_draft(course: &Training) -> (Training, String) {
    (course.clone(), course.skills.join(", "))
}

/// Split a comma separated list into trimmed, non-blank entries
pub fn split_commas(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

type Status = Option<(NoticeKind, String)>;

/// Run a write against the backend, then reload the about content
fn save<F, Fut>(
    client: ApiClient,
    about: UseStateHandle<Option<About>>,
    status: UseStateHandle<Status>,
    write: F,
    done: &'static str,
    failed: &'static str,
) where
    F: FnOnce(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<(), ClientError>> + 'static,
{
    spawn_local(async move {
        match write(client.clone()).await {
            Ok(()) => {
                status.set(Some((NoticeKind::Success, done.into())));
                match client.get_about().await {
                    Ok(loaded) => about.set(Some(loaded)),
                    Err(error) => tracing::warn!(%error, "failed to reload about content"),
                }
            }
            Err(error) => status.set(Some((NoticeKind::Error, failure_message(&error, failed)))),
        }
    });
}

#[function_component(AboutEditor)]
pub fn about_editor() -> Html {
    let auth = use_auth();
    let about = use_state(|| None::<About>);
    let status = use_state(|| Status::None);
    let new_job = use_state(Experience::default);
    let new_job_duties = use_state(String::new);
    let job_editing = use_state(Editing::default);
    let new_course = use_state(Training::default);
    let new_course_skills = use_state(String::new);
    let course_editing = use_state(Editing::default);

    {
        let client = auth.client();
        let about = about.clone();
        let status = status.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match client.get_about().await {
                    Ok(loaded) => about.set(Some(loaded)),
                    Err(error) => {
                        tracing::error!(%error, "failed to fetch about content");
                        about.set(Some(About::default()));
                        status.set(Some((NoticeKind::Error, "Failed to fetch about content".into())));
                    }
                }
            });
        });
    }

    let Some(current) = (*about).clone() else {
        return html! { <Spinner /> };
    };
    let client = auth.client();

    let on_summary = {
        let about = about.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            if let Some(mut next) = (*about).clone() {
                next.summary = input.value();
                about.set(Some(next));
            }
        })
    };

    let save_summary = {
        let (client, about, status) = (client.clone(), about.clone(), status.clone());
        let summary = current.summary.clone();
        Callback::from(move |_: MouseEvent| {
            let summary = summary.clone();
            save(
                client.clone(),
                about.clone(),
                status.clone(),
                move |client| async move { client.update_summary(&summary).await },
                "Summary updated successfully!",
                "Failed to update summary",
            );
        })
    };

    let save_education = {
        let (client, about, status) = (client.clone(), about.clone(), status.clone());
        let education = current.education.clone();
        Callback::from(move |_: MouseEvent| {
            let education = education.clone();
            save(
                client.clone(),
                about.clone(),
                status.clone(),
                move |client| async move { client.update_education(&education).await },
                "Education updated successfully!",
                "Failed to update education",
            );
        })
    };

    let save_skills = {
        let (client, about, status) = (client.clone(), about.clone(), status.clone());
        let skills = current.skills.clone();
        Callback::from(move |_: MouseEvent| {
            let skills = skills.clone();
            save(
                client.clone(),
                about.clone(),
                status.clone(),
                move |client| async move { client.update_skills(&skills).await },
                "Skills updated successfully!",
                "Failed to update skills",
            );
        })
    };

    let on_add_skill = {
        let about = about.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(mut next) = (*about).clone() {
                add_skill(&mut next.skills);
                about.set(Some(next));
            }
        })
    };

    let reset_job = {
        let (new_job, new_job_duties) = (new_job.clone(), new_job_duties.clone());
        let job_editing = job_editing.clone();
        Callback::from(move |()| {
            new_job.set(Experience::default());
            new_job_duties.set(String::new());
            job_editing.set(Editing::New);
        })
    };

    let submit_job = {
        let (client, about, status) = (client.clone(), about.clone(), status.clone());
        let (new_job, new_job_duties) = (new_job.clone(), new_job_duties.clone());
        let (job_editing, reset_job) = (job_editing.clone(), reset_job.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let job = Experience {
                responsibilities: split_lines(&new_job_duties),
                ..(*new_job).clone()
            };
            if job.title.trim().is_empty() {
                status.set(Some((NoticeKind::Error, "Job title is required".into())));
                return;
            }
            let target = (*job_editing).clone();
            let done = match target {
                Editing::New => "Experience added!",
                Editing::Existing(_) => "Experience updated!",
            };
            reset_job.emit(());
            save(
                client.clone(),
                about.clone(),
                status.clone(),
                move |client| async move {
                    match &target {
                        Editing::New => client.add_experience(&job).await,
                        Editing::Existing(id) => client.update_experience(id, &job).await,
                    }
                },
                done,
                "Failed to save experience",
            );
        })
    };

    let reset_course = {
        let (new_course, new_course_skills) = (new_course.clone(), new_course_skills.clone());
        let course_editing = course_editing.clone();
        Callback::from(move |()| {
            new_course.set(Training::default());
            new_course_skills.set(String::new());
            course_editing.set(Editing::New);
        })
    };

    let submit_course = {
        let (client, about, status) = (client.clone(), about.clone(), status.clone());
        let (new_course, new_course_skills) = (new_course.clone(), new_course_skills.clone());
        let (course_editing, reset_course) = (course_editing.clone(), reset_course.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let course = Training {
                skills: split_commas(&new_course_skills),
                ..(*new_course).clone()
            };
            if course.title.trim().is_empty() {
                status.set(Some((NoticeKind::Error, "Training title is required".into())));
                return;
            }
            let target = (*course_editing).clone();
            let done = match target {
                Editing::New => "Training added!",
                Editing::Existing(_) => "Training updated!",
            };
            reset_course.emit(());
            save(
                client.clone(),
                about.clone(),
                status.clone(),
                move |client| async move {
                    match &target {
                        Editing::New => client.add_training(&course).await,
                        Editing::Existing(id) => client.update_training(id, &course).await,
                    }
                },
                done,
                "Failed to save training",
            );
        })
    };

    let skill_rows = current.skills.iter().enumerate().map(|(index, skill)| {
        let on_category = update_field(&about, move |loaded: &mut Option<About>, v| {
            if let Some(skill) = loaded.as_mut().and_then(|a| a.skills.get_mut(index)) {
                skill.category = v;
            }
        });
        let on_items = update_field(&about, move |loaded: &mut Option<About>, v| {
            if let Some(skill) = loaded.as_mut().and_then(|a| a.skills.get_mut(index)) {
                skill.items = v;
            }
        });
        let on_remove = {
            let about = about.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(mut next) = (*about).clone() {
                    if index < next.skills.len() {
                        next.skills.remove(index);
                    }
                    about.set(Some(next));
                }
            })
        };

        html! {
            <div key={skill.id.clone()} class="flex gap-3">
                <input class={INPUT_CLASS} placeholder="Category" value={skill.category.clone()} oninput={on_category} />
                <input class={INPUT_CLASS} placeholder="Items" value={skill.items.clone()} oninput={on_items} />
                <button type="button" onclick={on_remove} class={DANGER_BUTTON}>{"Remove"}</button>
            </div>
        }
    });

    let job_rows = current.experience.iter().map(|job| {
        let on_edit = {
            let (new_job, new_job_duties) = (new_job.clone(), new_job_duties.clone());
            let job_editing = job_editing.clone();
            let job = job.clone();
            Callback::from(move |_: MouseEvent| {
                let (draft, duties) = job_draft(&job);
                new_job.set(draft);
                new_job_duties.set(duties);
                job_editing.set(Editing::Existing(job.id.clone()));
            })
        };
        let on_delete = {
            let (client, about, status) = (client.clone(), about.clone(), status.clone());
            let id = job.id.clone();
            Callback::from(move |_: MouseEvent| {
                if !confirm("Delete this experience?") {
                    return;
                }
                let id = id.clone();
                save(
                    client.clone(),
                    about.clone(),
                    status.clone(),
                    move |client| async move { client.delete_experience(&id).await },
                    "Experience deleted!",
                    "Failed to delete experience",
                );
            })
        };

        html! {
            <div key={job.id.clone()} class="p-4 bg-gray-50 rounded-md flex justify-between">
                <div>
                    <h4 class="font-medium">{format!("{} at {}", job.title, job.company)}</h4>
                    <p class="text-sm text-gray-500">{job.duration.clone()}</p>
                </div>
                <div class="flex gap-2 items-start">
                    <button onclick={on_edit} class={EDIT_BUTTON}>{"Edit"}</button>
                    <button onclick={on_delete} class={DANGER_BUTTON}>{"Delete"}</button>
                </div>
            </div>
        }
    });

    let course_rows = current.training.iter().map(|course| {
        let on_edit = {
            let (new_course, new_course_skills) = (new_course.clone(), new_course_skills.clone());
            let course_editing = course_editing.clone();
            let course = course.clone();
            Callback::from(move |_: MouseEvent| {
                let (draft, skills) = course_draft(&course);
                new_course.set(draft);
                new_course_skills.set(skills);
                course_editing.set(Editing::Existing(course.id.clone()));
            })
        };
        let on_delete = {
            let (client, about, status) = (client.clone(), about.clone(), status.clone());
            let id = course.id.clone();
            Callback::from(move |_: MouseEvent| {
                if !confirm("Delete this training?") {
                    return;
                }
                let id = id.clone();
                save(
                    client.clone(),
                    about.clone(),
                    status.clone(),
                    move |client| async move { client.delete_training(&id).await },
                    "Training deleted!",
                    "Failed to delete training",
                );
            })
        };

        html! {
            <div key={course.id.clone()} class="p-4 bg-gray-50 rounded-md flex justify-between">
                <div>
                    <h4 class="font-medium">{course.title.clone()}</h4>
                    <p class="text-sm text-gray-500">{format!("{} · {}", course.institution, course.skills.join(", "))}</p>
                </div>
                <div class="flex gap-2 items-start">
                    <button onclick={on_edit} class={EDIT_BUTTON}>{"Edit"}</button>
                    <button onclick={on_delete} class={DANGER_BUTTON}>{"Delete"}</button>
                </div>
            </div>
        }
    });

    let (kind, message) = match &*status {
        Some((kind, message)) => (*kind, Some(message.clone())),
        None => (NoticeKind::Error, None),
    };
    let section = "p-6 bg-white rounded-lg shadow space-y-4";

    html! {
        <div class="space-y-6 max-w-3xl">
            <div>
                <h1 class="text-2xl font-bold text-gray-900">{"About Me"}</h1>
                <p class="text-gray-600">{"Edit the content of your about page"}</p>
            </div>

            <Notice {kind} {message} />

            <section class={section}>
                <h2 class="text-lg font-semibold">{"Summary"}</h2>
                <textarea class={INPUT_CLASS} rows="5" value={current.summary.clone()} oninput={on_summary} />
                <button onclick={save_summary} class={PRIMARY_BUTTON}>{"Save Summary"}</button>
            </section>

            <section class={section}>
                <h2 class="text-lg font-semibold">{"Education"}</h2>
                <input class={INPUT_CLASS} placeholder="Degree" value={current.education.degree.clone()}
                    oninput={update_field(&about, |a: &mut Option<About>, v| if let Some(a) = a { a.education.degree = v })} />
                <input class={INPUT_CLASS} placeholder="Institution" value={current.education.institution.clone()}
                    oninput={update_field(&about, |a: &mut Option<About>, v| if let Some(a) = a { a.education.institution = v })} />
                <input class={INPUT_CLASS} placeholder="Grade" value={current.education.grade.clone()}
                    oninput={update_field(&about, |a: &mut Option<About>, v| if let Some(a) = a { a.education.grade = v })} />
                <input class={INPUT_CLASS} placeholder="Graduation year" value={current.education.graduation_year.clone()}
                    oninput={update_field(&about, |a: &mut Option<About>, v| if let Some(a) = a { a.education.graduation_year = v })} />
                <button onclick={save_education} class={PRIMARY_BUTTON}>{"Save Education"}</button>
            </section>

            <section class={section}>
                <h2 class="text-lg font-semibold">{"Experience"}</h2>
                { for job_rows }
                <form onsubmit={submit_job} class="space-y-3 pt-4 border-t border-gray-100">
                    <input class={INPUT_CLASS} placeholder="Job title" value={new_job.title.clone()}
                        oninput={update_field(&new_job, |j: &mut Experience, v| j.title = v)} />
                    <input class={INPUT_CLASS} placeholder="Company" value={new_job.company.clone()}
                        oninput={update_field(&new_job, |j: &mut Experience, v| j.company = v)} />
                    <input class={INPUT_CLASS} placeholder="Duration" value={new_job.duration.clone()}
                        oninput={update_field(&new_job, |j: &mut Experience, v| j.duration = v)} />
                    <textarea class={INPUT_CLASS} rows="3" placeholder="Responsibilities, one per line"
                        value={(*new_job_duties).clone()} oninput={bind_textarea(&new_job_duties)} />
                    if *job_editing == Editing::New {
                        <button type="submit" class={PRIMARY_BUTTON}>{"Add Experience"}</button>
                    } else {
                        <div class="flex gap-3">
                            <button type="submit" class={PRIMARY_BUTTON}>{"Update Experience"}</button>
                            <button type="button" onclick={reset_job.reform(|_: MouseEvent| ())} class={EDIT_BUTTON}>{"Cancel"}</button>
                        </div>
                    }
                </form>
            </section>

            <section class={section}>
                <h2 class="text-lg font-semibold">{"Training"}</h2>
                { for course_rows }
                <form onsubmit={submit_course} class="space-y-3 pt-4 border-t border-gray-100">
                    <input class={INPUT_CLASS} placeholder="Course title" value={new_course.title.clone()}
                        oninput={update_field(&new_course, |t: &mut Training, v| t.title = v)} />
                    <input class={INPUT_CLASS} placeholder="Institution" value={new_course.institution.clone()}
                        oninput={update_field(&new_course, |t: &mut Training, v| t.institution = v)} />
                    <input class={INPUT_CLASS} placeholder="Skills (comma separated)"
                        value={(*new_course_skills).clone()} oninput={bind_input(&new_course_skills)} />
                    if *course_editing == Editing::New {
                        <button type="submit" class={PRIMARY_BUTTON}>{"Add Training"}</button>
                    } else {
                        <div class="flex gap-3">
                            <button type="submit" class={PRIMARY_BUTTON}>{"Update Training"}</button>
                            <button type="button" onclick={reset_course.reform(|_: MouseEvent| ())} class={EDIT_BUTTON}>{"Cancel"}</button>
                        </div>
                    }
                </form>
            </section>

            <section class={section}>
                <h2 class="text-lg font-semibold">{"Skills"}</h2>
                { for skill_rows }
                <div class="flex gap-3">
                    <button type="button" onclick={on_add_skill} class={EDIT_BUTTON}>{"Add Category"}</button>
                    <button onclick={save_skills} class={PRIMARY_BUTTON}>{"Save Skills"}</button>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_skill_picks_unused_id() {
        let mut skills = vec![
            SkillCategory {
                id: "skill-2".into(),
                category: "Languages".into(),
                items: "Rust".into(),
            },
            SkillCategory {
                id: "1700000000000".into(),
                ..SkillCategory::default()
            },
        ];

        add_skill(&mut skills);
        assert_eq!(skills.len(), 3);
        assert_eq!(skills[2].id, "skill-3");
        assert!(skills[2].category.is_empty());

        let mut empty = Vec::new();
        add_skill(&mut empty);
        assert_eq!(empty[0].id, "skill-1");
    }

    #[test]
    fn test_add_skill_after_largest_possible_id() {
        let mut skills = vec![SkillCategory {
            id: format!("skill-{}", u64::MAX),
            ..SkillCategory::default()
        }];

        add_skill(&mut skills);
        add_skill(&mut skills);

        let ids: Vec<&str> = skills.iter().map(|skill| skill.id.as_str()).collect();
        assert_eq!(ids[1], "skill-1");
        assert_eq!(ids[2], "skill-2");
    }

    #[test]
    fn test_drafts_show_lists_as_typed() {
        let job = Experience {
            id: "e1".into(),
            title: "Engineer".into(),
            responsibilities: vec!["Built things".into(), "Shipped things".into()],
            ..Experience::default()
        };
        let (draft, duties) = job_draft(&job);
        assert_eq!(draft.id, "e1");
        assert_eq!(duties, "Built things\nShipped things");
        assert_eq!(split_lines(&duties), job.responsibilities);

        let course = Training {
            id: "t1".into(),
            skills: vec!["Rust".into(), "Yew".into()],
            ..Training::default()
        };
        let (draft, skills) = course_draft(&course);
        assert_eq!(draft.id, "t1");
        assert_eq!(skills, "Rust, Yew");
    }

    #[test]
    fn test_split_lines_drops_blank_lines() {
        assert_eq!(
            split_lines("Built things\n\n  Shipped things  \n"),
            vec!["Built things", "Shipped things"]
        );
    }

    #[test]
    fn test_split_commas() {
        assert_eq!(split_commas("Rust, , Yew"), vec!["Rust", "Yew"]);
        assert!(split_commas("").is_empty());
    }
}
