//! Static mock data shown by the dashboard panels.

use crate::engine::stream::{LogColor, LogEntry, LogLevel};

const fn log(
    time: &'static str,
    level: LogLevel,
    message: &'static str,
    color: LogColor,
) -> LogEntry {
    LogEntry {
        time,
        level,
        message,
        color,
    }
}

/// The scripted production log replayed by the Server Logs panel.
#[rustfmt::skip]
pub static LOG_FEED: [LogEntry; 12] = [
    log("14:05:22", LogLevel::Info, "Starting deployment process for commit #a1b2c3", LogColor::Blue),
    log("14:05:23", LogLevel::Info, "Docker container 'frontend-v2' stopped", LogColor::Blue),
    log("14:05:24", LogLevel::Info, "Pulling image: srm-tech/frontend:latest", LogColor::Blue),
    log("14:05:28", LogLevel::Info, "Image pulled successfully (450MB)", LogColor::Blue),
    log("14:05:30", LogLevel::Warn, "Memory usage high on worker-node-04 (85%)", LogColor::Yellow),
    log("14:05:32", LogLevel::Info, "Starting container 'frontend-v2'...", LogColor::Blue),
    log("14:05:35", LogLevel::Info, "Health check passed: http://localhost:3000/health", LogColor::Green),
    log("14:05:36", LogLevel::Error, "Connection timeout: Redis Cache at 10.0.1.5:6379", LogColor::Red),
    log("14:05:37", LogLevel::Warn, "Retrying connection (Attempt 1/3)...", LogColor::Yellow),
    log("14:05:39", LogLevel::Info, "Connection established.", LogColor::Green),
    log("14:05:40", LogLevel::Info, "Nginx reloaded successfully.", LogColor::Green),
    log("14:05:42", LogLevel::Info, "Deployment #142 completed in 20s.", LogColor::Green),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Health {
    Good,
    Degraded,
    Down,
}

pub struct NodeStatus {
    pub name: &'static str,
    pub zone: &'static str,
    pub status: &'static str,
    pub health: Health,
}

#[rustfmt::skip]
pub static CLUSTER_NODES: [NodeStatus; 4] = [
    NodeStatus { name: "api-gateway-v1", zone: "us-east-1a", status: "Healthy", health: Health::Good },
    NodeStatus { name: "postgres-primary", zone: "us-east-1b", status: "Healthy", health: Health::Good },
    NodeStatus { name: "redis-cache-01", zone: "us-east-1a", status: "Latency", health: Health::Degraded },
    NodeStatus { name: "worker-node-04", zone: "us-east-1c", status: "Offline", health: Health::Down },
];

pub struct ResourceUsage {
    pub label: &'static str,
    pub percent: u16,
}

#[rustfmt::skip]
pub static RESOURCES: [ResourceUsage; 4] = [
    ResourceUsage { label: "CPU Load (Core)", percent: 75 },
    ResourceUsage { label: "Memory (RAM)", percent: 45 },
    ResourceUsage { label: "Storage (S3)", percent: 20 },
    ResourceUsage { label: "Network I/O", percent: 90 },
];

pub struct WeeklyDeploys {
    pub total: u32,
    pub change: &'static str,
    pub success_rate: &'static str,
    pub per_day: [(&'static str, u64); 7],
}

pub static WEEKLY_DEPLOYS: WeeklyDeploys = WeeklyDeploys {
    total: 142,
    change: "+12.5%",
    success_rate: "98.5% Success",
    per_day: [
        ("Mon", 15),
        ("Tue", 22),
        ("Wed", 18),
        ("Thu", 30),
        ("Fri", 25),
        ("Sat", 10),
        ("Sun", 5),
    ],
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failed,
    Building,
    Active,
}

impl RunStatus {
    pub fn label(self) -> &'static str {
        match self {
            RunStatus::Success => "Success",
            RunStatus::Failed => "Failed",
            RunStatus::Building => "Building...",
            RunStatus::Active => "Active",
        }
    }
}

pub struct PipelineRun {
    pub commit: &'static str,
    pub message: &'static str,
    pub triggered_by: &'static str,
    pub duration: &'static str,
    pub status: RunStatus,
}

#[rustfmt::skip]
pub static PIPELINE_RUNS: [PipelineRun; 4] = [
    PipelineRun { commit: "#a1b2c3", message: "Update deployment script", triggered_by: "Mukesh T.", duration: "2m 14s", status: RunStatus::Success },
    PipelineRun { commit: "#d4e5f6", message: "Fix typo in Wizard", triggered_by: "System", duration: "1m 45s", status: RunStatus::Success },
    PipelineRun { commit: "#987654", message: "Refactor Sidebar logic", triggered_by: "Admin", duration: "0m 12s", status: RunStatus::Failed },
    PipelineRun { commit: "#123abc", message: "Add SSL Certs", triggered_by: "Certbot", duration: "3m 20s", status: RunStatus::Building },
];

pub struct DeploymentRecord {
    pub project: &'static str,
    pub branch: &'static str,
    pub commit: &'static str,
    pub environment: &'static str,
    pub time: &'static str,
    pub status: RunStatus,
}

#[rustfmt::skip]
pub static DEPLOYMENT_HISTORY: [DeploymentRecord; 3] = [
    DeploymentRecord { project: "srmist-inv", branch: "main", commit: "#8f4a21", environment: "Production", time: "Oct 24, 14:30", status: RunStatus::Active },
    DeploymentRecord { project: "payment-gateway", branch: "dev", commit: "#c22b90", environment: "Development", time: "Oct 24, 11:15", status: RunStatus::Failed },
    DeploymentRecord { project: "auth-service", branch: "feature/login", commit: "#d99e12", environment: "QA", time: "Just now", status: RunStatus::Building },
];

pub struct ServerCard {
    pub name: &'static str,
    pub instance: &'static str,
    pub ip: &'static str,
    pub running: bool,
    pub cpu: u16,
}

#[rustfmt::skip]
pub static SERVERS: [ServerCard; 3] = [
    ServerCard { name: "app-server-01", instance: "t3.medium", ip: "10.0.1.24", running: true, cpu: 45 },
    ServerCard { name: "worker-node-01", instance: "t3.small", ip: "10.0.1.25", running: true, cpu: 78 },
    ServerCard { name: "jenkins-build-agent", instance: "c5.large", ip: "10.0.2.10", running: false, cpu: 0 },
];

pub struct Bucket {
    pub name: &'static str,
    pub region: &'static str,
    pub size: &'static str,
    pub files: &'static str,
}

#[rustfmt::skip]
pub static BUCKETS: [Bucket; 2] = [
    Bucket { name: "srm-deployment-artifacts", region: "ap-south-1", size: "45.2 GB", files: "1,204" },
    Bucket { name: "srm-app-logs-archive", region: "ap-south-1", size: "120.5 GB", files: "54,000+" },
];

pub struct Database {
    pub name: &'static str,
    pub engine: &'static str,
    pub status: &'static str,
    pub uptime: &'static str,
    pub connections: u32,
    pub iops: &'static str,
}

pub static DATABASE: Database = Database {
    name: "production-db-cluster",
    engine: "PostgreSQL 14.2 • db.r6g.large",
    status: "Available",
    uptime: "45d 12h",
    connections: 142,
    iops: "3,200",
};

pub struct TaskCard {
    pub title: &'static str,
    pub tag: &'static str,
    pub assignee: Option<&'static str>,
    pub description: Option<&'static str>,
}

pub struct TaskColumn {
    pub title: &'static str,
    pub count: u32,
    pub cards: &'static [TaskCard],
}

pub static SPRINT_TITLE: &str = "Sprint 42: Infrastructure";

#[rustfmt::skip]
pub static TASK_BOARD: [TaskColumn; 3] = [
    TaskColumn {
        title: "To Do",
        count: 3,
        cards: &[
            TaskCard { title: "Update SSL Certs", tag: "Security", assignee: Some("MK"), description: Some("Wildcard cert for *.srm-tech.com expiring in 3 days.") },
            TaskCard { title: "Migrate to T3.Large", tag: "Infra", assignee: Some("AJ"), description: Some("Worker nodes running out of RAM.") },
            TaskCard { title: "Setup Grafana", tag: "Monitoring", assignee: None, description: Some("Visualize Nginx logs.") },
        ],
    },
    TaskColumn {
        title: "In Progress",
        count: 2,
        cards: &[
            TaskCard { title: "Fix Login Bug", tag: "Backend", assignee: Some("MK"), description: Some("Auth service returning 500 on timeout.") },
            TaskCard { title: "Dockerize Python API", tag: "DevOps", assignee: Some("SR"), description: None },
        ],
    },
    TaskColumn {
        title: "Deployed (Prod)",
        count: 4,
        cards: &[
            TaskCard { title: "v2.1 Release", tag: "Release", assignee: Some("System"), description: Some("Successfully deployed to ap-south-1") },
        ],
    },
];
