mod bootstrap;
mod contact;
mod dom;
mod site;

use contact::ContactSection;
use dom::{DocumentRoot, LocalStore, TransitionRoot};
use portfolio_interactions::hover::{hover_style, HoverPhase, HoverTarget};
use portfolio_interactions::logging::{LogLevel, Logger};
use portfolio_interactions::theme::{
    apply_stored_theme, is_dark_class, toggle_theme, StagedClass, Theme,
};
use serde_json::json;
use site::Site;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Applies the stored preference and returns the class now on the root.
fn startup_theme() -> String {
    apply_stored_theme(&LocalStore, &mut DocumentRoot)
}

/// Pointer handler bound to one element.
fn hover_callback(node: NodeRef, target: HoverTarget, phase: HoverPhase) -> Callback<MouseEvent> {
    Callback::from(move |_event: MouseEvent| {
        if let Some(element) = node.cast::<HtmlElement>() {
            dom::set_styles(&element, hover_style(target, phase));
        }
    })
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    title: AttrValue,
    description: AttrValue,
    image: AttrValue,
    href: AttrValue,
    tags: Vec<AttrValue>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let card = use_node_ref();
    let onmouseenter = hover_callback(card.clone(), HoverTarget::Project, HoverPhase::Enter);
    let onmouseleave = hover_callback(card.clone(), HoverTarget::Project, HoverPhase::Leave);

    html! {
        <article class="project-card fade-in" ref={card} {onmouseenter} {onmouseleave}>
            <img class="project-image lazy" data-src={props.image.clone()} alt={props.title.clone()} />
            <div class="project-content">
                <h3>{props.title.clone()}</h3>
                <p>{props.description.clone()}</p>
                <ul class="project-tags">
                    { for props.tags.iter().map(|tag| html! { <li>{tag.clone()}</li> }) }
                </ul>
                <a class="project-link" href={props.href.clone()} target="_blank" rel="noopener noreferrer">
                    {"View project"}
                    <span class="sr-only">{" (opens in a new tab)"}</span>
                </a>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct SkillChipProps {
    name: AttrValue,
    icon: AttrValue,
}

#[function_component(SkillChip)]
fn skill_chip(props: &SkillChipProps) -> Html {
    let chip = use_node_ref();
    let onmouseenter = hover_callback(chip.clone(), HoverTarget::Skill, HoverPhase::Enter);
    let onmouseleave = hover_callback(chip.clone(), HoverTarget::Skill, HoverPhase::Leave);

    html! {
        <li class="skill-item" ref={chip} {onmouseenter} {onmouseleave}>
            <i class={classes!("fab", props.icon.to_string())} aria-hidden="true"></i>
            <span>{props.name.clone()}</span>
        </li>
    }
}

#[function_component(App)]
fn app() -> Html {
    let site = use_memo((), |_| Site::from_document());
    let theme = use_state(startup_theme);
    let staged = use_memo((), |_| StagedClass::default());

    {
        let site = site.clone();
        use_effect_with((), move |_| {
            let wiring = bootstrap::wire(site);
            move || drop(wiring)
        });
    }

    let on_toggle_menu = {
        let site = site.clone();
        Callback::from(move |_: MouseEvent| site.toggle_menu())
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        let staged = (*staged).clone();
        let analytics = site.analytics;
        Callback::from(move |_: MouseEvent| {
            let next = toggle_theme(&mut LocalStore, &mut TransitionRoot::new(staged.clone()));
            analytics.track_event("theme", "toggle", Some(next.as_str()));
            theme.set(next.as_str().to_string());
        })
    };

    let next_theme = Theme::after(&theme);

    html! {
        <>
            <a class="skip-link" href="#about">{"Skip to main content"}</a>
            <div class="scroll-progress" aria-hidden="true"></div>
            <nav class="navbar" aria-label="Primary">
                <div class="nav-container">
                    <a class="nav-logo" href="#home">{"Portfolio"}</a>
                    <ul class="nav-menu">
                        <li><a class="nav-link" href="#home">{"Home"}</a></li>
                        <li><a class="nav-link" href="#about">{"About"}</a></li>
                        <li><a class="nav-link" href="#projects">{"Projects"}</a></li>
                        <li><a class="nav-link" href="#skills">{"Skills"}</a></li>
                        <li><a class="nav-link" href="#contact">{"Contact"}</a></li>
                    </ul>
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={next_theme.switch_label()}
                        aria-pressed={is_dark_class(&theme).to_string()}
                        onclick={on_toggle_theme}
                    >
                        <i class={classes!("fas", next_theme.switch_icon())} aria-hidden="true"></i>
                    </button>
                    <button class="hamburger" type="button" aria-label="Toggle navigation" onclick={on_toggle_menu}>
                        <i class="fas fa-bars" aria-hidden="true"></i>
                    </button>
                </div>
            </nav>

            <header id="home" class="hero">
                <div class="hero-content fade-in">
                    <h1 class="hero-title">{"Hi, I'm a software developer"}</h1>
                    <p class="hero-subtitle">{"I build reliable, accessible web experiences."}</p>
                    <div class="hero-buttons">
                        <a href="#projects" class="btn btn-primary">{"View My Work"}</a>
                        <a href="#contact" class="btn btn-secondary">{"Get In Touch"}</a>
                    </div>
                </div>
            </header>

            <main>
                <section id="about" class="about section">
                    <div class="container">
                        <h2 class="section-title fade-in">{"About Me"}</h2>
                        <div class="about-content fade-in">
                            <img class="about-image lazy" data-src="/images/profile.jpg" alt="Portrait" />
                            <p>
                                {"I enjoy turning rough ideas into polished products, from interface details to the systems behind them."}
                            </p>
                        </div>
                    </div>
                </section>

                <section id="projects" class="projects section">
                    <div class="container">
                        <h2 class="section-title fade-in">{"Projects"}</h2>
                        <div class="projects-grid">
                            <ProjectCard
                                title="Task Board"
                                description="Collaborative kanban board with offline support."
                                image="/images/projects/task-board.webp"
                                href="https://github.com/"
                                tags={vec![AttrValue::from("Rust"), AttrValue::from("WebAssembly")]}
                            />
                            <ProjectCard
                                title="Weather Lens"
                                description="Forecast dashboard with location search and charts."
                                image="/images/projects/weather-lens.webp"
                                href="https://github.com/"
                                tags={vec![AttrValue::from("TypeScript"), AttrValue::from("Charts")]}
                            />
                            <ProjectCard
                                title="Recipe Finder"
                                description="Ingredient-first recipe search with saved collections."
                                image="/images/projects/recipe-finder.webp"
                                href="https://github.com/"
                                tags={vec![AttrValue::from("Python"), AttrValue::from("PostgreSQL")]}
                            />
                        </div>
                    </div>
                </section>

                <section id="skills" class="skills section">
                    <div class="container">
                        <h2 class="section-title fade-in">{"Skills"}</h2>
                        <ul class="skills-grid fade-in">
                            <SkillChip name="Rust" icon="fa-rust" />
                            <SkillChip name="JavaScript" icon="fa-js" />
                            <SkillChip name="Python" icon="fa-python" />
                            <SkillChip name="HTML" icon="fa-html5" />
                            <SkillChip name="CSS" icon="fa-css3-alt" />
                            <SkillChip name="Git" icon="fa-git-alt" />
                        </ul>
                    </div>
                </section>

                <ContactSection
                    logger={site.logger}
                    analytics={site.analytics}
                    submit_delay_ms={site.config.submit_delay_ms}
                    message_dismiss_ms={site.config.message_dismiss_ms}
                />
            </main>

            <footer class="footer">
                <p>{"Built with Rust and WebAssembly."}</p>
            </footer>
        </>
    }
}

pub fn run() {
    let Some(mount) = dom::document().and_then(|document| document.get_element_by_id("app")) else {
        Logger::new(LogLevel::Error).event(
            LogLevel::Error,
            "mount_point_missing",
            json!({ "id": "app" }),
        );
        return;
    };

    yew::Renderer::<App>::with_root(mount).render();
}
