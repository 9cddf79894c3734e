use std::rc::Rc;

use yew::prelude::*;
use log::info;

use crate::components::icon::{Icon, IconKind};
use crate::components::reveal_section::RevealSection;
use crate::content::{About, Contact, Footer, Portfolio, Profile, Project, Projects};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub profile: Profile,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let profile = &props.profile;

    html! {
        <div class="hero-inner">
            <div class="hero-grid"></div>
            <div class="container hero-content">
                <img class="hero-avatar" src={profile.avatar.clone()} alt="Profile" />
                <h1 class="hero-name intro-step" style="animation-delay: 0.2s;">{&profile.name}</h1>
                <p class="hero-tagline intro-step" style="animation-delay: 0.3s;">{&profile.tagline}</p>
                <div class="hero-links intro-fade" style="animation-delay: 0.4s;">
                    { for profile.links.iter().map(|link| html! {
                        <a class="hero-link" href={link.href.clone()} aria-label={link.label.clone()}>
                            <Icon kind={link.icon} />
                        </a>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub about: About,
}

#[function_component(AboutBlock)]
pub fn about_block(props: &AboutProps) -> Html {
    let about = &props.about;

    html! {
        <div class="container about-row">
            <div class="about-text">
                <h2 class="section-heading">
                    <Icon kind={IconKind::User} class={classes!("heading-icon")} />
                    {&about.heading}
                </h2>
                { for about.paragraphs.iter().map(|p| html! { <p class="muted">{p}</p> }) }
                <div class="skills-grid">
                    { for about.skills.iter().map(|group| html! {
                        <div class="skill-card">
                            <h3>{&group.title}</h3>
                            <p class="muted">{group.summary()}</p>
                        </div>
                    }) }
                </div>
            </div>
            <div class="about-image">
                <img src={about.image.clone()} alt={about.image_alt.clone()} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let href = project.link.clone().unwrap_or_else(|| "#".to_string());

    html! {
        <div class="project-card">
            <img class="project-image" src={project.image.clone()} alt={project.title.clone()} />
            <div class="project-body">
                <h3>{&project.title}</h3>
                <p class="muted">{&project.description}</p>
                <div class="project-footer">
                    <div class="project-tags">
                        { for project.tags.iter().map(|tag| html! {
                            <span class={classes!("tag", tag.tone.class())}>{&tag.label}</span>
                        }) }
                    </div>
                    <a class="project-link" href={href} aria-label={format!("Open {}", project.title)}>
                        <Icon kind={IconKind::ExternalLink} />
                    </a>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: Projects,
}

#[function_component(ProjectGrid)]
pub fn project_grid(props: &ProjectsProps) -> Html {
    html! {
        <div class="container">
            <h2 class="section-heading centered">
                <Icon kind={IconKind::Code} class={classes!("heading-icon")} />
                {&props.projects.heading}
            </h2>
            <div class="project-grid">
                { for props.projects.items.iter().map(|project| html! {
                    <ProjectCard key={project.title.clone()} project={project.clone()} />
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub contact: Contact,
}

#[function_component(ContactBlock)]
pub fn contact_block(props: &ContactProps) -> Html {
    let contact = &props.contact;

    html! {
        <div class="container centered">
            <h2 class="section-heading centered">{&contact.heading}</h2>
            <p class="muted contact-body">{&contact.body}</p>
            {
                match &contact.cta_href {
                    Some(href) => html! {
                        <a class="contact-cta" href={href.clone()}>{&contact.cta_label}</a>
                    },
                    None => html! {
                        <button type="button" class="contact-cta">{&contact.cta_label}</button>
                    },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub footer: Footer,
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <div class="container centered">
                <p>{props.footer.copyright()}</p>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioPageProps {
    pub portfolio: Rc<Portfolio>,
}

#[function_component(PortfolioPage)]
pub fn portfolio_page(props: &PortfolioPageProps) -> Html {
    let portfolio = &props.portfolio;

    {
        use_effect_with_deps(
            move |_| {
                info!("Rendering portfolio page");
                || ()
            },
            (),
        );
    }

    html! {
        <div class="portfolio-page">
            <style>
                {r#"
                    .portfolio-page {
                        background: #f9fafb;
                        color: #111827;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .centered {
                        text-align: center;
                        justify-content: center;
                    }
                    .muted {
                        color: #4b5563;
                        line-height: 1.7;
                    }
                    .icon {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .section-heading {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .heading-icon {
                        width: 2rem;
                        height: 2rem;
                        color: #2563eb;
                    }
                    .band {
                        padding: 5rem 0;
                    }
                    .band-white {
                        background: #fff;
                    }
                    .band-gray {
                        background: #f9fafb;
                    }

                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        overflow: hidden;
                        background: linear-gradient(to bottom right, #eff6ff, #eef2ff);
                    }
                    .hero-grid {
                        position: absolute;
                        inset: 0;
                        opacity: 0.05;
                        background-image: linear-gradient(#000 1px, transparent 1px),
                            linear-gradient(90deg, #000 1px, transparent 1px);
                        background-size: 40px 40px;
                    }
                    .hero-content {
                        position: relative;
                        padding: 4rem 1rem;
                        text-align: center;
                    }
                    .hero-avatar {
                        width: 8rem;
                        height: 8rem;
                        border-radius: 50%;
                        object-fit: cover;
                        border: 4px solid #fff;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        margin: 0 auto 2rem;
                        display: block;
                        animation: popIn 0.6s cubic-bezier(0.34, 1.56, 0.64, 1) both;
                    }
                    .hero-name {
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                        background: linear-gradient(to right, #2563eb, #4f46e5);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-tagline {
                        font-size: 1.25rem;
                        color: #4b5563;
                        margin-bottom: 2rem;
                    }
                    .hero-links {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .hero-link {
                        padding: 0.5rem;
                        background: #fff;
                        border-radius: 50%;
                        color: #374151;
                        display: inline-flex;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: box-shadow 0.2s;
                    }
                    .hero-link:hover {
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                    }
                    .intro-step {
                        animation: riseIn 0.5s ease-out both;
                    }
                    .intro-fade {
                        animation: fadeIn 0.5s ease-out both;
                    }
                    @keyframes popIn {
                        from { transform: scale(0); }
                        to { transform: scale(1); }
                    }
                    @keyframes riseIn {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }

                    .about-row {
                        display: flex;
                        align-items: center;
                        gap: 3rem;
                    }
                    .about-text, .about-image {
                        flex: 1;
                    }
                    .about-image img {
                        width: 100%;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .skills-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1rem;
                    }
                    .skill-card {
                        padding: 1rem;
                        background: #f9fafb;
                        border-radius: 0.5rem;
                    }
                    .skill-card h3 {
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }

                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .project-card {
                        background: #fff;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    .project-card:hover {
                        transform: translateY(-5px);
                    }
                    .project-image {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                    }
                    .project-body {
                        padding: 1.5rem;
                    }
                    .project-body h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .project-footer {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .project-tags {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .tag {
                        padding: 0.25rem 0.5rem;
                        border-radius: 0.25rem;
                        font-size: 0.875rem;
                    }
                    .tag-blue { background: #dbeafe; color: #2563eb; }
                    .tag-green { background: #dcfce7; color: #16a34a; }
                    .tag-purple { background: #ede9fe; color: #7c3aed; }
                    .tag-gray { background: #f3f4f6; color: #4b5563; }
                    .project-link {
                        color: #2563eb;
                    }
                    .project-link:hover {
                        color: #1d4ed8;
                    }

                    .contact-body {
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                    }
                    .contact-cta {
                        display: inline-block;
                        background: #2563eb;
                        color: #fff;
                        padding: 0.75rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                        transition: background-color 0.2s, transform 0.2s;
                    }
                    .contact-cta:hover {
                        background: #1d4ed8;
                        transform: scale(1.05);
                    }
                    .contact-cta:active {
                        transform: scale(0.95);
                    }

                    .site-footer {
                        background: #111827;
                        color: #fff;
                        padding: 2rem 0;
                    }

                    @media (max-width: 1024px) {
                        .project-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 768px) {
                        .about-row {
                            flex-direction: column;
                        }
                        .project-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>

            <RevealSection id="hero" class={classes!("hero")}>
                <Hero profile={portfolio.profile.clone()} />
            </RevealSection>

            <RevealSection id="about" class={classes!("band", "band-white")}>
                <AboutBlock about={portfolio.about.clone()} />
            </RevealSection>

            <RevealSection id="projects" class={classes!("band", "band-gray")}>
                <ProjectGrid projects={portfolio.projects.clone()} />
            </RevealSection>

            <RevealSection id="contact" class={classes!("band", "band-white")}>
                <ContactBlock contact={portfolio.contact.clone()} />
            </RevealSection>

            <SiteFooter footer={portfolio.footer.clone()} />
        </div>
    }
}
