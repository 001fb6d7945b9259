//! Landing page component
//!
//! The single marketing page for LeadQ.AI:
//! - SEO meta tags
//! - Hero with call-to-action buttons
//! - Feature pillars and the lead capture showcase
//! - AI agent grid followed by the three scripted demos
//! - Workflow, dashboard preview and use cases
//! - Pricing, FAQ accordion and testimonial carousel
//! - Final call-to-action, contact form and footer

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::content::{
    AGENTS, AccordionState, Agent, COPYRIGHT, Carousel, DASHBOARD_STATS, FAQS,
    HERO, PILLARS, PIPELINE_CHART, PLANS, Plan, TESTIMONIALS, USE_CASES, WORKFLOW, chart_line_path,
};
use crate::core::navigation::NAV_ITEMS;
use crate::ui::contact_form::ContactForm;
use crate::ui::demos::{EmailDraftDemo, MeetingDemo, ProfileResearchDemo};
use crate::ui::icon::{Icon, icons};
use crate::ui::lead_capture::LeadCapture;
use crate::ui::navbar::{Navbar, scroll_to_section};
use crate::ui::scroll_to_top::ScrollToTop;

const CHART_WIDTH: f64 = 400.0;
const CHART_HEIGHT: f64 = 160.0;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen overflow-x-hidden">
            <Navbar />

            <main id="main-content" tabindex="-1">
                <Hero />
                <FeaturesSection />
                <LeadCapture />
                <AgentsSection />
                <WorkflowSection />
                <DashboardPreview />
                <UseCasesSection />
                <PricingSection />
                <FaqSection />
                <TestimonialsSection />
                <FinalCta />
                <ContactForm />
            </main>

            <Footer />
            <ScrollToTop />
        </div>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="LeadQ.AI - AI Agents for Lead Generation" />
        <Meta name="description" content="LeadQ.AI turns every handshake into pipeline. AI agents research, follow up and book meetings while you sell." />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="LeadQ.AI - AI Agents for Lead Generation" />
        <Meta property="og:description" content="Capture leads offline, let a swarm of AI agents work them, and run it all from one dashboard." />
        <Meta name="twitter:card" content="summary_large_image" />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center relative pt-24 px-6">
            <div class="text-center max-w-4xl mx-auto">
                <span class="pill mb-6 inline-flex items-center gap-2">
                    <Icon name=icons::SPARKLES class="w-4 h-4"/>
                    "Multi-agent sales automation"
                </span>
                <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold text-white tracking-tight mb-6">
                    {HERO.headline}
                    <br/>
                    <span class="text-gradient">{HERO.highlight}</span>
                </h1>
                <p class="text-xl text-gray-300 max-w-2xl mx-auto mb-10 leading-relaxed">
                    {HERO.subtitle}
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <a
                        href="#contact"
                        class="btn-primary"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section("contact");
                        }
                    >
                        "Book a Demo"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4"/>
                    </a>
                    <a
                        href="#agents"
                        class="btn-secondary"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section("agents");
                        }
                    >
                        "Meet the Agents"
                    </a>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce" aria-hidden="true">
                <Icon name=icons::CHEVRON_DOWN class="w-6 h-6" />
            </div>
            <div class="hero-glow" aria-hidden="true"></div>
        </section>
    }
}

#[component]
fn SectionHeading(badge: &'static str, title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-14">
            <span class="pill mb-4 inline-block">{badge}</span>
            <h2 class="section-title">{title}</h2>
            <p class="section-subtitle mx-auto max-w-2xl">{subtitle}</p>
        </div>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <SectionHeading
                badge="Features"
                title="From Handshake to Pipeline"
                subtitle="Three layers that turn real-world conversations into executed sales workflows."
            />
            <div class="grid md:grid-cols-3 gap-6">
                {PILLARS.iter().map(|pillar| view! {
                    <article class="glass rounded-2xl p-8">
                        <p class="text-xs uppercase tracking-wide text-amber-400 mb-3">{pillar.highlight}</p>
                        <h3 class="text-xl font-semibold text-white mb-3">{pillar.title}</h3>
                        <p class="text-gray-400 leading-relaxed">{pillar.description}</p>
                    </article>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn AgentsSection() -> impl IntoView {
    view! {
        <section id="agents" class="section">
            <SectionHeading
                badge="AI Agents"
                title="A Swarm That Works Every Lead"
                subtitle="Specialised agents hand work to each other so nothing waits on you."
            />
            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4 mb-20">
                {AGENTS.iter().map(|agent| view! { <AgentCard agent=agent /> }).collect_view()}
            </div>

            <div class="space-y-24">
                <MeetingDemo />
                <ProfileResearchDemo />
                <EmailDraftDemo />
            </div>
        </section>
    }
}

#[component]
fn AgentCard(agent: &'static Agent) -> impl IntoView {
    view! {
        <article class="glass rounded-2xl p-6 relative" class:agent-highlight=agent.is_highlighted()>
            {agent.badge.map(|badge| view! {
                <span class="absolute -top-3 right-4 pill pill-accent">{badge}</span>
            })}
            <h3 class="text-lg font-semibold text-white mb-2">{agent.title}</h3>
            <p class="text-sm text-gray-400">{agent.description}</p>
        </article>
    }
}

#[component]
fn WorkflowSection() -> impl IntoView {
    view! {
        <section id="workflow" class="section">
            <SectionHeading
                badge="How It Works"
                title="Lead In, Meeting Out"
                subtitle="One tap starts a workflow that ends in your calendar."
            />
            <ol class="grid md:grid-cols-3 gap-6">
                {WORKFLOW.iter().enumerate().map(|(i, step)| view! {
                    <li class="glass rounded-2xl p-8">
                        <span class="step-number">{i + 1}</span>
                        <h3 class="text-xl font-semibold text-white mt-4 mb-2">{step.title}</h3>
                        <p class="text-gray-400">{step.description}</p>
                    </li>
                }).collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn DashboardPreview() -> impl IntoView {
    let values: Vec<u32> = PIPELINE_CHART.iter().map(|(_, v)| *v).collect();
    let line = chart_line_path(&values, CHART_WIDTH, CHART_HEIGHT);

    view! {
        <section id="dashboard" class="section">
            <SectionHeading
                badge="Command Center"
                title="One Living Dashboard"
                subtitle="Every tap, agent action and meeting lands in a single real-time view."
            />
            <div class="glass rounded-3xl p-8">
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
                    {DASHBOARD_STATS.iter().map(|stat| view! {
                        <div class="rounded-xl bg-white/5 p-5">
                            <p class="text-xs text-gray-400">{stat.label}</p>
                            <p class="text-2xl font-bold text-white mt-1">{stat.value}</p>
                            <p
                                class="text-xs mt-1"
                                class:text-emerald-400=stat.is_positive()
                                class:text-red-400=!stat.is_positive()
                            >
                                {stat.trend}
                            </p>
                        </div>
                    }).collect_view()}
                </div>

                <figure>
                    <svg
                        viewBox=format!("0 -10 {CHART_WIDTH} {}", CHART_HEIGHT + 20.0)
                        class="w-full h-48"
                        role="img"
                        aria-label="Pipeline value by month"
                    >
                        <path d=line fill="none" stroke="#f59e0b" stroke-width="3" stroke-linecap="round" />
                    </svg>
                    <figcaption class="flex justify-between text-xs text-gray-500 mt-2">
                        {PIPELINE_CHART.iter().map(|(month, _)| view! { <span>{*month}</span> }).collect_view()}
                    </figcaption>
                </figure>
            </div>
        </section>
    }
}

#[component]
fn UseCasesSection() -> impl IntoView {
    view! {
        <section id="use-cases" class="section">
            <SectionHeading
                badge="Use Cases"
                title="Built for Teams That Meet People"
                subtitle="Wherever conversations start, LeadQ keeps them going."
            />
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {USE_CASES.iter().map(|case| view! {
                    <article class="glass rounded-2xl p-6 flex flex-col">
                        <h3 class="text-lg font-semibold text-white mb-2">{case.title}</h3>
                        <p class="text-sm text-gray-400 flex-1">{case.description}</p>
                        <dl class="grid grid-cols-2 gap-3 mt-6 pt-4 border-t border-white/10">
                            {case.stats.iter().map(|(label, value)| view! {
                                <div>
                                    <dd class="text-xl font-bold text-amber-400">{*value}</dd>
                                    <dt class="text-xs text-gray-500">{*label}</dt>
                                </div>
                            }).collect_view()}
                        </dl>
                    </article>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="section">
            <SectionHeading
                badge="Pricing"
                title="Simple, Credit-Based Pricing"
                subtitle="Pick a plan, top up credits when you need more."
            />
            <div class="grid md:grid-cols-3 gap-8 max-w-6xl mx-auto items-stretch">
                {PLANS.iter().map(|plan| view! { <PricingCard plan=plan /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PricingCard(plan: &'static Plan) -> impl IntoView {
    let card_class = if plan.popular {
        "relative glass rounded-2xl p-8 border-2 border-amber-500 shadow-xl md:scale-105 flex flex-col"
    } else {
        "relative glass rounded-2xl p-8 flex flex-col"
    };

    view! {
        <div class=card_class>
            {plan.popular.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 pill pill-accent">"Most Popular"</div>
            })}

            <div class="text-center mb-6">
                <h3 class="text-xl font-bold text-white mb-2">{plan.name}</h3>
                <div class="flex items-baseline justify-center gap-1">
                    <span class="text-4xl font-bold text-white">{plan.price}</span>
                    {plan.period.map(|period| view! { <span class="text-gray-400">{period}</span> })}
                </div>
                <p class="text-sm text-amber-300 mt-2">{plan.credits}</p>
            </div>

            <ul class="space-y-3 mb-8 flex-1">
                {plan.features.iter().map(|feature| view! {
                    <li class="flex items-center gap-3 text-sm text-gray-200">
                        <Icon name=icons::CHECK class="w-5 h-5 shrink-0" />
                        {*feature}
                    </li>
                }).collect_view()}
            </ul>

            <a
                href="#contact"
                class=if plan.popular { "btn-primary justify-center" } else { "btn-secondary justify-center" }
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to_section("contact");
                }
            >
                {plan.cta}
            </a>
        </div>
    }
}

#[component]
fn FaqSection() -> impl IntoView {
    let accordion = RwSignal::new(AccordionState::default());

    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && accordion.with_untracked(|a| a.open_index().is_some()) {
                accordion.update(|a| a.close());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <section id="faq" class="section">
            <SectionHeading
                badge="FAQ"
                title="Frequently Asked Questions"
                subtitle="Got questions? We've got answers."
            />
            <div class="max-w-3xl mx-auto space-y-4">
                {FAQS.iter().enumerate().map(|(index, faq)| {
                    let is_open = move || accordion.with(|a| a.is_open(index));
                    let panel_id = format!("faq-panel-{index}");
                    view! {
                        <div class="glass rounded-xl overflow-hidden">
                            <button
                                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left"
                                on:click=move |_| accordion.update(|a| a.toggle(index))
                                aria-expanded=move || is_open().to_string()
                                aria-controls=panel_id.clone()
                            >
                                <span class="font-semibold text-white">{faq.question}</span>
                                <span
                                    class="shrink-0 transition-transform duration-300"
                                    class=("rotate-180", is_open)
                                >
                                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                                </span>
                            </button>
                            <div
                                id=panel_id
                                class="overflow-hidden transition-all duration-300"
                                class:max-h-0=move || !is_open()
                                class:max-h-96=is_open
                            >
                                <p class="px-6 pb-4 text-gray-400 leading-relaxed">{faq.answer}</p>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TestimonialsSection() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::Interval;

        use crate::core::content::CAROUSEL_TICK_MS;

        let interval = Interval::new(CAROUSEL_TICK_MS, move || {
            let _ = carousel.try_update(|c| c.tick(CAROUSEL_TICK_MS));
        });
        // Dropped with the component, which clears the interval
        StoredValue::new_local(interval);
    }

    let current = move || carousel.with(|c| c.current());

    view! {
        <section id="testimonials" class="section">
            <SectionHeading
                badge="Testimonials"
                title="Teams Closing More With LeadQ"
                subtitle="What happens when follow-ups stop slipping."
            />
            <div class="max-w-3xl mx-auto text-center" aria-roledescription="carousel">
                <div class="glass rounded-3xl p-10 min-h-64" aria-live="polite">
                    {move || {
                        TESTIMONIALS.get(current()).map(|t| view! {
                            <div class="flex justify-center gap-1 mb-6" aria-label=format!("{} out of 5 stars", t.rating)>
                                {(0..t.rating).map(|_| view! { <Icon name=icons::STAR class="w-5 h-5"/> }).collect_view()}
                            </div>
                            <blockquote class="text-xl text-gray-100 leading-relaxed mb-6">
                                {format!("\u{201c}{}\u{201d}", t.quote)}
                            </blockquote>
                            <p class="font-semibold text-white">{t.name}</p>
                            <p class="text-sm text-gray-400">{t.title}</p>
                        })
                    }}
                </div>

                <div class="flex items-center justify-center gap-4 mt-6">
                    <button class="btn-icon" aria-label="Previous testimonial" on:click=move |_| carousel.update(|c| c.prev_slide())>
                        <Icon name=icons::CHEVRON_LEFT class="w-5 h-5"/>
                    </button>
                    <div class="flex gap-2">
                        {(0..TESTIMONIALS.len()).map(|index| view! {
                            <button
                                class="carousel-dot"
                                class:carousel-dot-active=move || current() == index
                                aria-label=format!("Show testimonial {}", index + 1)
                                on:click=move |_| carousel.update(|c| c.go_to(index))
                            ></button>
                        }).collect_view()}
                    </div>
                    <button class="btn-icon" aria-label="Next testimonial" on:click=move |_| carousel.update(|c| c.next_slide())>
                        <Icon name=icons::CHEVRON_RIGHT class="w-5 h-5"/>
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FinalCta() -> impl IntoView {
    view! {
        <section class="section">
            <div class="glass rounded-3xl p-12 text-center cta-glow">
                <h2 class="section-title">"Stop Losing Leads After the Handshake"</h2>
                <p class="section-subtitle mx-auto max-w-xl mb-8">
                    "Put your agents to work today and walk into every meeting prepared."
                </p>
                <a
                    href="#contact"
                    class="btn-primary"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section("contact");
                    }
                >
                    "Get Started"
                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4"/>
                </a>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-white/10">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-2 mb-4 text-xl font-bold text-white">
                            <Icon name=icons::SPARKLES class="w-6 h-6"/>
                            "LeadQ.AI"
                        </div>
                        <p class="text-sm text-gray-400 max-w-md">
                            "AI agents that capture, research and follow up on every lead you meet."
                        </p>
                    </div>

                    <div>
                        <h4 class="font-semibold text-white mb-4">"Product"</h4>
                        <ul class="space-y-2">
                            {NAV_ITEMS.iter().map(|item| view! {
                                <li>
                                    <a href=item.href() class="text-sm text-gray-400 hover:text-amber-400 transition-colors">
                                        {item.name}
                                    </a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-semibold text-white mb-4">"Legal"</h4>
                        <ul class="space-y-2">
                            <li>
                                <A href="/privacy-policy" attr:class="text-sm text-gray-400 hover:text-amber-400 transition-colors">
                                    "Privacy Policy"
                                </A>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="pt-8 border-t border-white/5 text-sm text-gray-500">
                    {COPYRIGHT}". All rights reserved."
                </div>
            </div>
        </footer>
    }
}
