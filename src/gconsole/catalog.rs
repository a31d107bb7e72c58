/// Every console URL starts with this prefix.
pub const CONSOLE_BASE_URL: &str = "https://console.cloud.google.com";

/// A single area of the cloud console that can be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaEntry {
    /// Lowercase key the query tokens are matched against.
    pub slug: &'static str,

    /// The label that will be shown to the user.
    pub name: &'static str,

    /// The product the area belongs to, shown as subtitle. Falls back to the name.
    pub description: Option<&'static str>,

    /// Name of the bundled image, without directory and extension.
    pub icon: &'static str,

    /// Path below the console base url.
    pub path: &'static str,
}

impl AreaEntry {
    const fn new(slug: &'static str, name: &'static str, icon: &'static str, path: &'static str) -> Self {
        Self { slug, name, description: None, icon, path }
    }

    const fn describe(self, description: &'static str) -> Self {
        Self { description: Some(description), ..self }
    }

    pub fn description(&self) -> &'static str {
        self.description.unwrap_or(self.name)
    }

    pub fn icon_path(&self) -> String {
        format!("images/{}.png", self.icon)
    }

    pub fn url(&self) -> String {
        format!("{}/{}", CONSOLE_BASE_URL, self.path)
    }

    pub fn url_for_project(&self, project: &str) -> String {
        format!("{}?project={}", self.url(), project)
    }
}

// The order of this list decides the order of equally good matches.
static AREAS: &[AreaEntry] = &[
    AreaEntry::new("artifact registry repositories", "Artifact Registry Repositories", "container_registry", "artifacts")
        .describe("Artifact Registry"),
    AreaEntry::new("bigtable instances", "Bigtable Instances", "bigtable", "bigtable/instances"),
    AreaEntry::new("billing", "Billing", "billing", "billing")
        .describe("Cloud Billing"),
    AreaEntry::new("compute instances", "Compute Instances", "compute_engine", "compute/instances")
        .describe("Compute Engine"),
    AreaEntry::new("dataflow jobs", "Dataflow Jobs", "dataflow", "dataflow/jobs"),
    AreaEntry::new("datastore databases", "Datastore Databases", "datastore", "datastore/databases"),
    AreaEntry::new("dns zones", "DNS Zones", "cloud_dns", "net-services/dns/zones")
        .describe("Cloud DNS"),
    AreaEntry::new("firestore databases", "Firestore Databases", "firestore", "firestore/databases"),
    AreaEntry::new("iam", "IAM", "identity_and_access_management", "iam-admin/iam")
        .describe("Identity and Access Management"),
    AreaEntry::new("iam service accounts", "IAM Service Accounts", "identity_and_access_management", "iam-admin/serviceaccounts"),
    AreaEntry::new("kubernetes clusters", "Kubernetes Clusters", "google_kubernetes_engine", "kubernetes/list")
        .describe("Google Kubernetes Engine"),
    AreaEntry::new("load balancers", "Load Balancers", "cloud_load_balancing", "net-services/loadbalancing/list/loadBalancers"),
    AreaEntry::new("logs", "Logs Explorer", "cloud_logging", "logs/query")
        .describe("Cloud Logging"),
    AreaEntry::new("metrics explorer", "Metrics Explorer", "cloud_monitoring", "monitoring/metrics-explorer"),
    AreaEntry::new("pubsub subscriptions", "Pub/Sub Subscriptions", "pubsub", "cloudpubsub/subscription"),
    AreaEntry::new("pubsub topics", "Pub/Sub Topics", "pubsub", "cloudpubsub/topic"),
    AreaEntry::new("pubsublite reservations", "Pub/Sub Lite Reservations", "pubsub", "cloudpubsub/liteReservation"),
    AreaEntry::new("pubsublite subscriptions", "Pub/Sub Lite Subscriptions", "pubsub", "cloudpubsub/liteSubscription"),
    AreaEntry::new("pubsublite topics", "Pub/Sub Lite Topics", "pubsub", "cloudpubsub/liteTopic"),
    AreaEntry::new("sql instances", "SQL Instances", "cloud_sql", "sql/instances")
        .describe("Cloud SQL"),
    AreaEntry::new("storage buckets", "Storage Buckets", "cloud_storage", "storage/browser")
        .describe("Cloud Storage"),
];

/// All known areas in their authoritative order.
pub fn areas() -> &'static [AreaEntry] {
    AREAS
}

/// Looks up an area by its slug.
#[cfg(test)]
pub fn find(slug: &str) -> Option<&'static AreaEntry> {
    AREAS.iter().find(|area| area.slug == slug)
}
