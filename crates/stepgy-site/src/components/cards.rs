//! Card components for page sections

use super::IconGlyph;
use leptos::*;
use stepgy_core::content::{SolutionStep, TeamMember, TechComponent};
use stepgy_core::Icon;

#[component]
pub fn StepCard(step: SolutionStep) -> impl IntoView {
    let SolutionStep { id, title, description, icon } = step;

    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 text-center h-full" data-step=id.to_string()>
            <div class="w-16 h-16 bg-green-600 text-white rounded-full flex items-center justify-center mx-auto mb-4">
                <IconGlyph icon=icon class="w-8 h-8"/>
            </div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn ComponentCard(component: TechComponent) -> impl IntoView {
    let TechComponent { name, description, icon } = component;

    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <div class="flex items-center space-x-3 mb-3">
                <div class="w-10 h-10 bg-green-100 rounded-lg flex items-center justify-center">
                    <IconGlyph icon=icon class="w-5 h-5 text-green-600"/>
                </div>
                <h3 class="text-lg font-semibold text-gray-900">{name}</h3>
            </div>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn MemberCard(member: TeamMember) -> impl IntoView {
    let TeamMember { name, role, description } = member;

    view! {
        <div class="bg-white rounded-xl shadow-lg p-6 text-center">
            <div class="w-20 h-20 bg-gradient-to-br from-green-400 to-green-600 rounded-full flex items-center justify-center mx-auto mb-4">
                <IconGlyph icon=Icon::Users class="w-10 h-10 text-white"/>
            </div>
            <h3 class="text-xl font-semibold text-gray-900">{name}</h3>
            <span class="inline-block mt-2 px-3 py-1 bg-green-100 text-green-800 text-sm rounded-full">
                {role}
            </span>
            <p class="text-gray-600 text-sm mt-3">{description}</p>
        </div>
    }
}

#[component]
pub fn InfoRow(icon: Icon, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-4">
            <div class="w-12 h-12 bg-green-100 rounded-lg flex items-center justify-center">
                <IconGlyph icon=icon class="w-6 h-6 text-green-600"/>
            </div>
            <div>
                <p class="font-semibold text-gray-900">{label}</p>
                <p class="text-gray-600">{value}</p>
            </div>
        </div>
    }
}
