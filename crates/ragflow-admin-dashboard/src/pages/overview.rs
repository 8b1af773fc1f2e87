//! Dashboard overview page component

use leptos::*;
use ragflow_admin_common::mock;
use ragflow_admin_common::routes::AppRoute;
use ragflow_admin_common::types::SummaryStat;
use super::shared::StatusBadge;

/// Overview page showing summary figures, service health and activity
#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <div class="stats-grid">
            {mock::summary_stats().into_iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
        </div>

        <div class="dashboard-grid">
            <SystemHealthCard />

            <div class="right-column">
                <ActivityCard />
            </div>
        </div>

        <QuickActionsCard />
    }
}

/// Stat card component
#[component]
fn StatCard(stat: SummaryStat) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-header">
                <span class="stat-label">{stat.title}</span>
                <span class="stat-change positive">
                    {format!("+{}% {}", stat.trend_percent, stat.trend_label)}
                </span>
            </div>
            <div class="stat-value">{stat.value}</div>
            <div class="stat-description">{stat.description}</div>
        </div>
    }
}

#[component]
fn SystemHealthCard() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">
                <span class="card-title">"System Health"</span>
                <span class="card-subtitle">"Trạng thái các dịch vụ cốt lõi"</span>
            </div>
            <div class="card-body">
                <div class="service-list">
                    {mock::system_services().into_iter().map(|service| view! {
                        <div class="service-item">
                            <div class="service-info">
                                <StatusBadge tone=service.status.tone() label=service.status.label() />
                                <span class="service-name">{service.name}</span>
                            </div>
                            <span class="service-latency">{service.latency}</span>
                        </div>
                    }).collect_view()}
                </div>
                <a href=AppRoute::Monitoring.path() class="btn btn-secondary btn-block">
                    "Xem chi tiết Monitoring"
                </a>
            </div>
        </div>
    }
}

#[component]
fn ActivityCard() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">
                <span class="card-title">"Recent Activity"</span>
                <span class="card-subtitle">"Hoạt động gần đây"</span>
            </div>
            <div class="card-body">
                <div class="activity-list">
                    {mock::recent_activity().into_iter().map(|entry| view! {
                        <div class="activity-item">
                            <div class="activity-dot"></div>
                            <div class="activity-content">
                                <p class="activity-action">{entry.action}</p>
                                <p class="activity-meta">{format!("by {} • {}", entry.user, entry.time)}</p>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Shortcuts into the most used pages
#[component]
fn QuickActionsCard() -> impl IntoView {
    let actions = [
        ("🗄️", "Tạo Dataset mới", AppRoute::Datasets),
        ("🤖", "Tạo Chatbot", AppRoute::Chatbots),
        ("📁", "Upload Files", AppRoute::Files),
        ("👥", "Quản lý Team", AppRoute::Team),
    ];

    view! {
        <div class="card">
            <div class="card-header">
                <span class="card-title">"Quick Actions"</span>
                <span class="card-subtitle">"Các thao tác thường dùng"</span>
            </div>
            <div class="card-body quick-actions">
                {actions.into_iter().map(|(icon, label, route)| view! {
                    <a href=route.path() class="quick-action">
                        <span class="quick-action-icon">{icon}</span>
                        <span>{label}</span>
                    </a>
                }).collect_view()}
            </div>
        </div>
    }
}
