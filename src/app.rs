use chrono::Datelike;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::config::SiteConfig;
use crate::gate::AdminGate;
use crate::grouping::group_rsvps;
use crate::model::RsvpRecord;
use crate::rsvp::SubmitStatus;
use crate::timestamp::format_date;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/wedding-rsvp.css" />

        // sets the document title
        <Title text="Bryant and Cindy | Wedding RSVP" />

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/admin") view=Admin />
                </Routes>
            </main>
        </Router>
    }
}

/// The public wedding page with the RSVP form.
#[component]
fn Home() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let group_number = RwSignal::new(String::new());
    let status = RwSignal::new(SubmitStatus::Idle);

    // A handler for the RSVP form. Validates locally first; nothing goes on
    // the wire unless all fields pass. On success, clears the inputs so the
    // form is ready for the next household member.
    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload =
            match crate::rsvp::validate_submission(&name.get(), &email.get(), &group_number.get())
            {
                Ok(payload) => payload,
                Err(e) => {
                    status.set(SubmitStatus::Error(e.to_string()));
                    return;
                }
            };
        status.set(SubmitStatus::Submitting);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::api::save_rsvp(&SiteConfig::from_build_env(), &payload).await;
            let outcome = crate::rsvp::submit_outcome(result);
            if matches!(outcome, SubmitStatus::Success(_)) {
                name.set(String::new());
                email.set(String::new());
                group_number.set(String::new());
            }
            status.set(outcome);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let year = chrono::Local::now().year();

    view! {
        <div class="site">
            <header class="site-nav">
                <nav>
                    <span class="nav-brand">"wedding rsvp"</span>
                    <a href="#our-story">"Our Story"</a>
                    <a href="#faq">"FAQ"</a>
                    <a href="#rsvp">"RSVP"</a>
                </nav>
            </header>

            <section id="home" class="hero">
                <h1>"Bryant " <span class="hero-amp">"&"</span> " Cindy"</h1>
                <p class="hero-sub">"We are getting married"</p>
            </section>

            <section id="our-story" class="content-section">
                <h2>"Once upon a time..."</h2>
                <p>
                    "How we met, the proposal, and everything we are looking forward to
                    sharing with you."
                </p>
            </section>

            <section id="faq" class="content-section">
                <h2>"Things You Might Be Wondering"</h2>
                <div class="card-grid">
                    <div class="card">
                        <h3>"Dress code"</h3>
                        <p>"Semi-formal."</p>
                    </div>
                    <div class="card">
                        <h3>"Venue and timing"</h3>
                        <p>"Details arrive with your invitation."</p>
                    </div>
                    <div class="card">
                        <h3>"Parking"</h3>
                        <p>"Free parking at the venue."</p>
                    </div>
                    <div class="card">
                        <h3>"Contact"</h3>
                        <p>"Reach out to either of us with questions."</p>
                    </div>
                </div>
            </section>

            <section id="rsvp" class="content-section rsvp">
                <h2>"Kindly Let Us Know"</h2>
                <p>"Please RSVP below with your name, email, and group number."</p>
                <form class="rsvp-form" on:submit=submit>
                    <input
                        class="form-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="number"
                        min="1"
                        max="999"
                        placeholder="Group number"
                        prop:value=move || group_number.get()
                        on:input=move |ev| group_number.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || status.get().is_submitting()
                    >
                        {move || {
                            if status.get().is_submitting() { "Submitting..." } else { "Submit RSVP" }
                        }}
                    </button>
                </form>
                {move || match status.get() {
                    SubmitStatus::Idle => view! {}.into_any(),
                    SubmitStatus::Submitting => {
                        view! { <p class="status">"Sending your RSVP..."</p> }.into_any()
                    }
                    SubmitStatus::Success(message) => {
                        view! { <p class="status success">{message}</p> }.into_any()
                    }
                    SubmitStatus::Error(message) => {
                        view! { <p class="status error">{message}</p> }.into_any()
                    }
                }}
            </section>

            <footer class="site-footer">{format!("© {} Wedding RSVP", year)}</footer>
        </div>
    }
}

/// The password-gated listing of submitted RSVPs, grouped by party.
#[component]
fn Admin() -> impl IntoView {
    let config = SiteConfig::from_build_env();

    // The gate starts locked on every page load; unlocking lasts for this
    // session only.
    let gate = RwSignal::new(AdminGate::new());
    let password = RwSignal::new(String::new());
    let gate_error = RwSignal::new(String::new());

    let rsvps = RwSignal::new(Vec::<RsvpRecord>::new());
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(String::new());

    // Fetches the listing. Called once when the gate unlocks, and again on
    // explicit refresh. A failure leaves whatever was shown before in place.
    let load_rsvps = move || {
        loading.set(true);
        load_error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::api::fetch_rsvps(&SiteConfig::from_build_env()).await {
                Ok(records) => rsvps.set(records),
                Err(e) => load_error.set(e.to_string()),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    };

    // A handler for the password form. The first accepted password performs
    // the unlock and triggers the one initial load.
    let unlock = move |ev: SubmitEvent| {
        ev.prevent_default();
        let candidate = password.get();
        match gate.try_update(|g| g.submit(config.admin_password, &candidate)) {
            Some(Ok(true)) => {
                gate_error.set(String::new());
                password.set(String::new());
                load_rsvps();
            }
            Some(Ok(false)) | None => {}
            Some(Err(e)) => gate_error.set(e.to_string()),
        }
    };

    view! {
        <div class="admin-container">
            {move || {
                if gate.get().is_unlocked() {
                    view! {
                        <header class="admin-header">
                            <div>
                                <h1>"Admin - RSVPs"</h1>
                                <p>
                                    "Total submissions: "
                                    <strong>{move || rsvps.get().len()}</strong>
                                </p>
                            </div>
                            <button
                                class="btn-secondary"
                                disabled=move || loading.get()
                                on:click=move |_| load_rsvps()
                            >
                                {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                            </button>
                        </header>

                        {move || loading.get().then(|| view! { <p>"Loading..."</p> })}
                        {move || {
                            (!load_error.get().is_empty())
                                .then(|| view! { <p class="error">"Error: " {load_error.get()}</p> })
                        }}

                        {move || {
                            let groups = group_rsvps(&rsvps.get());
                            if groups.is_empty() && !loading.get() && load_error.get().is_empty() {
                                return view! { <p>"No RSVPs yet."</p> }.into_any();
                            }
                            groups
                                .into_iter()
                                .map(|(number, members)| {
                                    let count = members.len();
                                    view! {
                                        <section class="admin-section">
                                            <h2>
                                                "Group " {number.to_string()}
                                                <span class="group-count">" (" {count} ")"</span>
                                            </h2>
                                            <div class="table-responsive">
                                                <table class="admin-table">
                                                    <tbody>
                                                        <tr>
                                                            <th>"Name"</th>
                                                            <th>"Email"</th>
                                                            <th>"Created"</th>
                                                        </tr>
                                                        {members
                                                            .into_iter()
                                                            .map(|record| {
                                                                let created = format_date(record.created_at.as_ref());
                                                                let created = if created.is_empty() {
                                                                    "-".to_string()
                                                                } else {
                                                                    created
                                                                };
                                                                view! {
                                                                    <tr>
                                                                        <td>{record.name}</td>
                                                                        <td>{record.email}</td>
                                                                        <td>{created}</td>
                                                                    </tr>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </tbody>
                                                </table>
                                            </div>
                                        </section>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="admin-login">
                            <h1>"Admin Login"</h1>
                            <form class="admin-form" on:submit=unlock>
                                <label>
                                    "Password: "
                                    <input
                                        class="form-input"
                                        type="password"
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                    />
                                </label>
                                <button type="submit" class="btn-primary">
                                    "Unlock"
                                </button>
                            </form>
                            {move || {
                                if !gate_error.get().is_empty() {
                                    view! { <p class="error">{gate_error.get()}</p> }.into_any()
                                } else {
                                    view! {}.into_any()
                                }
                            }}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
