//! Cherry Servers API models.
//!
//! Response types decode with `#[serde(default)]`: the API omits empty
//! fields, and a missing field becomes its zero value rather than an error.
//! Request types skip unset optional fields when serialized.

use cherry_core::id::{
    BackupStorageId, IpAddressId, PlanId, ProjectId, ServerId, SshKeyId, StorageId, TeamId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Shared shapes
// ---------------------------------------------------------------------------

/// Price attached to a plan, image or running resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Pricing {
    /// Price per unit.
    pub price: f64,
    /// Whether the price includes tax.
    pub taxed: bool,
    /// ISO currency code.
    pub currency: String,
    /// Billing unit, e.g. `Hourly`.
    pub unit: String,
}

/// BGP details of a region.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RegionBgp {
    /// Route server hosts.
    pub hosts: Vec<String>,
    /// Provider ASN.
    pub asn: u64,
}

/// A data center region.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Region {
    /// Numeric region id.
    pub id: u64,
    /// Display name, e.g. `EU-Nord-1`.
    pub name: String,
    /// Slug used in requests, e.g. `eu_nord_1`.
    pub slug: String,
    /// Two letter country code.
    pub region_iso_2: String,
    /// Human readable location.
    pub location: String,
    /// BGP details.
    pub bgp: RegionBgp,
    /// API reference.
    pub href: String,
}

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

/// Balance of one credit account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CreditBalance {
    /// Remaining credit.
    pub remaining: f64,
    /// Consumed credit.
    pub usage: f64,
    /// ISO currency code.
    pub currency: String,
}

/// Resource spending summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CreditResources {
    /// Current spending rate.
    pub pricing: Pricing,
}

/// Team credit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Credit {
    /// Paid account balance.
    pub account: CreditBalance,
    /// Promotional balance.
    pub promo: CreditBalance,
    /// Spending summary.
    pub resources: CreditResources,
}

/// VAT registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Vat {
    /// VAT rate.
    pub amount: i64,
    /// VAT number.
    pub number: String,
    /// Whether the number was validated.
    pub valid: bool,
}

/// Billing details of a team.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Billing {
    /// `personal` or `business`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Company name.
    pub company_name: String,
    /// Company registration code.
    pub company_code: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Address line 1.
    #[serde(rename = "address_1")]
    pub address1: String,
    /// Address line 2.
    #[serde(rename = "address_2")]
    pub address2: String,
    /// Two letter country code.
    #[serde(rename = "country_iso_2")]
    pub country_iso2: String,
    /// City.
    pub city: String,
    /// VAT registration.
    pub vat: Vat,
    /// Billing currency.
    pub currency: String,
}

/// A team owning projects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Team {
    /// Team id.
    pub id: TeamId,
    /// Team name.
    pub name: String,
    /// Credit balances.
    pub credit: Credit,
    /// Billing details.
    pub billing: Billing,
    /// API reference.
    pub href: String,
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// Project level BGP settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectBgp {
    /// Whether BGP is enabled.
    pub enabled: bool,
    /// Local ASN assigned to the project.
    pub local_asn: u64,
}

/// A project groups servers, addresses and storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Project {
    /// Project id.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// BGP settings.
    pub bgp: ProjectBgp,
    /// API reference.
    pub href: String,
}

/// Request to create a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateProject {
    /// Project name.
    pub name: String,
    /// Enable BGP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp: Option<bool>,
}

/// Request to update a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateProject {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Enable or disable BGP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp: Option<bool>,
}

// ---------------------------------------------------------------------------
// Plans and images
// ---------------------------------------------------------------------------

/// CPU specification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Cpus {
    /// Number of CPUs.
    pub count: u32,
    /// CPU model.
    pub name: String,
    /// Cores per CPU.
    pub cores: u32,
    /// Clock frequency.
    pub frequency: f64,
    /// Frequency unit.
    pub unit: String,
}

/// Memory specification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Memory {
    /// Number of modules.
    pub count: u32,
    /// Total memory.
    pub total: u64,
    /// Memory unit.
    pub unit: String,
    /// Display name.
    pub name: String,
}

/// One disk group of a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlanStorage {
    /// Number of disks.
    pub count: u32,
    /// Display name.
    pub name: String,
    /// Size of one disk.
    pub size: u64,
    /// Size unit.
    pub unit: String,
    /// Disk type, e.g. `SSD`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// RAID specification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Raid {
    /// Display name.
    pub name: String,
}

/// Network interface specification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Nics {
    /// Display name.
    pub name: String,
}

/// Bandwidth specification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Bandwidth {
    /// Display name.
    pub name: String,
}

/// Hardware specification of a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Specs {
    /// CPUs.
    pub cpus: Cpus,
    /// Memory.
    pub memory: Memory,
    /// Disks.
    pub storage: Vec<PlanStorage>,
    /// RAID.
    pub raid: Raid,
    /// Network interfaces.
    pub nics: Nics,
    /// Bandwidth.
    pub bandwidth: Bandwidth,
}

/// Stock of a plan in one region.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AvailableRegion {
    /// Region, flattened into the same object.
    #[serde(flatten)]
    pub region: Region,
    /// Servers in stock.
    pub stock_qty: u32,
    /// Spot servers in stock.
    pub spot_qty: u32,
}

/// A server plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Plan {
    /// Plan id.
    pub id: PlanId,
    /// Display name.
    pub name: String,
    /// Slug used when creating servers.
    pub slug: String,
    /// Whether the plan is custom built.
    pub custom: bool,
    /// Plan category.
    pub category: String,
    /// Hardware.
    pub specs: Specs,
    /// Prices.
    pub pricing: Vec<Pricing>,
    /// Regional stock.
    pub available_regions: Vec<AvailableRegion>,
}

/// An operating system image offered for a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Image {
    /// Image id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Slug used when creating servers.
    pub slug: String,
    /// Prices.
    pub pricing: Vec<Pricing>,
}

// ---------------------------------------------------------------------------
// SSH keys
// ---------------------------------------------------------------------------

/// A stored SSH public key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SshKey {
    /// Key id.
    pub id: SshKeyId,
    /// Label.
    pub label: String,
    /// Public key.
    pub key: String,
    /// Key fingerprint.
    pub fingerprint: String,
    /// Last update timestamp.
    pub updated: String,
    /// Creation timestamp.
    pub created: String,
    /// API reference.
    pub href: String,
}

/// Request to store an SSH key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateSshKey {
    /// Label.
    pub label: String,
    /// Public key.
    pub key: String,
}

/// Request to update an SSH key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateSshKey {
    /// New label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// New public key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

// ---------------------------------------------------------------------------
// IP addresses
// ---------------------------------------------------------------------------

/// Address a floating IP is routed to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoutedTo {
    /// Target address id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<IpAddressId>,
    /// Target address.
    pub address: String,
    /// 4 or 6.
    pub address_family: u8,
    /// Target CIDR.
    pub cidr: String,
    /// Gateway.
    pub gateway: String,
    /// Address type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Region.
    pub region: Region,
}

/// Server an address is assigned to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssignedTo {
    /// Server id.
    pub id: ServerId,
    /// Server name.
    pub name: String,
    /// API reference.
    pub href: String,
    /// Hostname.
    pub hostname: String,
    /// Image name.
    pub image: String,
    /// Region.
    pub region: Region,
    /// Server state.
    pub state: String,
    /// Server price.
    pub pricing: Pricing,
}

/// An IP address or subnet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IpAddress {
    /// Address id.
    pub id: IpAddressId,
    /// Address.
    pub address: String,
    /// 4 or 6.
    pub address_family: u8,
    /// CIDR.
    pub cidr: String,
    /// Gateway.
    pub gateway: String,
    /// `primary-ip`, `floating-ip`, `subnet` or `private-ip`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Region.
    pub region: Region,
    /// Routing target for floating addresses.
    pub routed_to: RoutedTo,
    /// Server the address is assigned to.
    pub assigned_to: AssignedTo,
    /// Server the address is targeted at.
    pub targeted_to: AssignedTo,
    /// Owning project.
    pub project: Project,
    /// Reverse DNS record.
    pub ptr_record: String,
    /// Forward DNS record.
    pub a_record: String,
    /// Tags.
    pub tags: HashMap<String, String>,
    /// API reference.
    pub href: String,
}

/// Request to allocate an IP address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateIpAddress {
    /// Address type, e.g. `floating-ip`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Region slug.
    pub region: String,
    /// Reverse DNS record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ptr_record: Option<String>,
    /// Forward DNS record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a_record: Option<String>,
    /// Route to another address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routed_to: Option<IpAddressId>,
    /// Assign to a server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<ServerId>,
    /// Target a server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeted_to: Option<ServerId>,
    /// Tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

/// Request to update an IP address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateIpAddress {
    /// Reverse DNS record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ptr_record: Option<String>,
    /// Forward DNS record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a_record: Option<String>,
    /// Route to another address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routed_to: Option<IpAddressId>,
    /// Assign to a server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<ServerId>,
    /// Tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

// ---------------------------------------------------------------------------
// Block storage
// ---------------------------------------------------------------------------

/// Server a volume is attached to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AttachedTo {
    /// Server id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ServerId>,
    /// Server hostname.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hostname: String,
    /// API reference.
    pub href: String,
}

/// A block storage volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BlockStorage {
    /// Volume id.
    pub id: StorageId,
    /// Volume name.
    pub name: String,
    /// API reference.
    pub href: String,
    /// Size in `unit`.
    pub size: u64,
    /// Whether the size may still change.
    pub allow_edit_size: bool,
    /// Size unit.
    pub unit: String,
    /// Description.
    pub description: String,
    /// Attachment target.
    pub attached_to: AttachedTo,
    /// VLAN id.
    pub vlan_id: String,
    /// VLAN address.
    pub vlan_ip: String,
    /// iSCSI initiator name.
    pub initiator: String,
    /// iSCSI discovery address.
    pub discovery_ip: String,
    /// Region.
    pub region: Region,
}

/// Request to create a volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateStorage {
    /// Owning project; also selects the request path.
    pub project_id: ProjectId,
    /// Description.
    pub description: String,
    /// Size in GB.
    pub size: u64,
    /// Region slug.
    pub region: String,
}

/// Request to resize or relabel a volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateStorage {
    /// Volume to update.
    pub storage_id: StorageId,
    /// New size in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request to attach a volume to a server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttachStorage {
    /// Volume to attach.
    pub storage_id: StorageId,
    /// Server to attach to.
    pub attach_to: ServerId,
}

// ---------------------------------------------------------------------------
// Servers
// ---------------------------------------------------------------------------

/// Server level BGP state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerBgp {
    /// Whether BGP is enabled.
    pub enabled: bool,
    /// Whether BGP can be enabled.
    pub available: bool,
    /// Session status.
    pub status: String,
    /// Maximum announced prefixes.
    pub limit: u32,
    /// Active sessions.
    pub active: u32,
}

/// A bare metal or virtual server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Server {
    /// Server id.
    pub id: ServerId,
    /// Plan name.
    pub name: String,
    /// API reference.
    pub href: String,
    /// Hostname.
    pub hostname: String,
    /// Installed image.
    pub image: String,
    /// Whether the server is a spot instance.
    pub spot_instance: bool,
    /// BGP state.
    pub bgp: ServerBgp,
    /// Owning project.
    pub project: Project,
    /// Region.
    pub region: Region,
    /// Lifecycle state, e.g. `active`.
    pub state: String,
    /// Plan.
    pub plan: Plan,
    /// Price.
    pub pricing: Pricing,
    /// Addresses bound to the server.
    pub ip_addresses: Vec<IpAddress>,
    /// Keys installed at provisioning.
    pub ssh_keys: Vec<SshKey>,
    /// Tags.
    pub tags: HashMap<String, String>,
    /// Attached volume.
    pub storage: BlockStorage,
    /// Creation timestamp.
    pub created_at: String,
    /// Scheduled termination timestamp.
    pub termination_date: String,
}

/// Power state of a server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PowerState {
    /// `on` or `off`.
    pub power: String,
}

/// Request to deploy a server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateServer {
    /// Plan slug.
    pub plan: String,
    /// Owning project; also selects the request path.
    pub project_id: ProjectId,
    /// Hostname.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hostname: String,
    /// Image slug.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    /// Region slug.
    pub region: String,
    /// SSH key ids to install.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<String>,
    /// Existing addresses to bind.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_addresses: Vec<String>,
    /// Base64 encoded cloud-init user data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    /// Tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    /// Request a spot instance.
    #[serde(default)]
    pub spot_market: bool,
    /// OS partition size in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_partition_size: Option<u32>,
}

/// Request to update a server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateServer {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New hostname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Replacement tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    /// Enable or disable BGP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp: Option<bool>,
}

/// Action accepted by the server actions endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerAction {
    /// Power on.
    #[serde(rename = "power_on")]
    PowerOn,
    /// Power off.
    #[serde(rename = "power_off")]
    PowerOff,
    /// Reboot.
    #[serde(rename = "reboot")]
    Reboot,
    /// Reset the BMC password.
    #[serde(rename = "reset-bmc-password")]
    ResetBmcPassword,
}

/// Body of a server action request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerActionRequest {
    /// Action to perform.
    #[serde(rename = "type")]
    pub action: ServerAction,
}

// ---------------------------------------------------------------------------
// Backups
// ---------------------------------------------------------------------------

/// Access method of a backup storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackupService {
    /// Method name, e.g. `FTP`.
    pub name: String,
    /// Login.
    pub username: String,
    /// Password.
    pub password: String,
    /// Host.
    pub host: String,
    /// SSH key for key based methods.
    pub ssh_key: String,
    /// Addresses allowed to connect.
    pub whitelist: Vec<String>,
    /// Whether the method is enabled.
    pub enabled: bool,
    /// Whether a change is being applied.
    pub processing: bool,
}

/// A backup storage attached to a server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackupStorage {
    /// Backup storage id.
    pub id: BackupStorageId,
    /// Provisioning status.
    pub status: String,
    /// Lifecycle state.
    pub state: String,
    /// Private address.
    pub private_ip: String,
    /// Public address.
    pub public_ip: String,
    /// Capacity in GB.
    pub size_gigabytes: u64,
    /// Used space in GB.
    pub used_gigabytes: u64,
    /// Server the storage belongs to.
    pub attached_to: AttachedTo,
    /// Access methods.
    pub methods: Vec<BackupService>,
    /// Region.
    pub region: Region,
    /// API reference.
    pub href: String,
}

/// A backup storage plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackupStoragePlan {
    /// Plan id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Slug used when ordering.
    pub slug: String,
    /// Capacity in GB.
    pub size_gigabytes: u64,
    /// Prices.
    pub pricing: Vec<Pricing>,
    /// Regions offering the plan.
    pub regions: Vec<Region>,
    /// API reference.
    pub href: String,
}

/// Request to order a backup storage for a server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateBackup {
    /// Server to back up; also selects the request path.
    pub server_id: ServerId,
    /// Backup plan slug.
    #[serde(rename = "slug")]
    pub plan_slug: String,
    /// Region slug.
    pub region: String,
    /// Public key for SFTP access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<String>,
}

/// Request to change a backup storage plan or password.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateBackupStorage {
    /// Backup storage to update.
    pub id: BackupStorageId,
    /// New plan slug.
    #[serde(default, rename = "slug", skip_serializing_if = "Option::is_none")]
    pub plan_slug: Option<String>,
    /// New password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Request to change one access method of a backup storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateBackupService {
    /// Backup storage to update.
    pub id: BackupStorageId,
    /// Method name; also selects the request path.
    pub name: String,
    /// Enable or disable the method.
    pub enabled: bool,
    /// Addresses allowed to connect.
    pub whitelist: Vec<String>,
    /// New password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// New SSH key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<String>,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// The authenticated user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    /// User id.
    pub id: u64,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Whether the email was verified.
    pub email_verified: bool,
    /// Phone number.
    pub phone: String,
    /// Phone used for security checks.
    pub security_phone: String,
    /// Whether the security phone was verified.
    pub security_phone_verified: bool,
    /// API reference.
    pub href: String,
}
