//! Global CSS styles for Gestión Mostrador.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --surface: #f6f7f9;
  --surface-card: #ffffff;
  --border: #d9dee4;

  /* BRAND */
  --primary: #2458a6;
  --primary-dark: #1c4584;

  /* TEXT */
  --text-primary: #1f2933;
  --text-secondary: #52606d;
  --text-muted: #7b8794;

  /* SEMANTIC */
  --success: #2e7d4f;
  --danger: #c62838;
  --warning: #b97509;
  --info: #2172ad;

  /* Typography */
  --font-sans: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 120ms ease;
}

/* === Reset === */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: var(--font-sans);
  color: var(--text-primary);
  background: var(--surface);
  font-size: 15px;
}

.panel-body {
  min-height: 100vh;
  position: relative;
  overflow: auto;
}

.panel-body.modal-open {
  overflow: hidden;
  padding-right: 15px;
}

.modal-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(31, 41, 51, 0.45);
  z-index: 90;
}

/* === Navigation === */
.nav-header {
  background: var(--surface-card);
  border-bottom: 1px solid var(--border);
}

.nav-header-inner {
  display: flex;
  align-items: center;
  gap: 2rem;
  padding: 0.75rem 1.5rem;
}

.app-title {
  font-size: 1.15rem;
  font-weight: 600;
  color: var(--primary);
  white-space: nowrap;
}

.nav-tabs {
  display: flex;
  gap: 0.25rem;
  flex: 1;
}

.nav-tab {
  padding: 0.45rem 1rem;
  border-radius: 6px 6px 0 0;
  color: var(--text-secondary);
  text-decoration: none;
  border-bottom: 2px solid transparent;
  transition: color var(--transition-fast);
}

.nav-tab:hover {
  color: var(--text-primary);
}

.nav-tab.active {
  color: var(--primary);
  border-bottom-color: var(--primary);
  font-weight: 600;
}

.auto-refresh {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--text-secondary);
  font-size: 0.85rem;
  white-space: nowrap;
}

.auto-refresh-check {
  width: 1rem;
  height: 1rem;
  accent-color: var(--primary);
}

/* === Alerts === */
.alert-area {
  padding: 0 1.5rem;
}

.alert {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-top: 0.75rem;
  padding: 0.6rem 0.9rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  background: var(--surface-card);
}

.alert-info    { border-left: 4px solid var(--info); }
.alert-success { border-left: 4px solid var(--success); }
.alert-warning { border-left: 4px solid var(--warning); }
.alert-danger  { border-left: 4px solid var(--danger); }

/* === Layout === */
.panel-content {
  padding: 1.25rem 1.5rem 3rem;
  max-width: 1100px;
  margin: 0 auto;
}

.page-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1rem;
}

.page-title {
  font-size: 1.35rem;
  font-weight: 600;
}

.toolbar {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.filter-panel {
  margin-bottom: 1rem;
  padding: 0.75rem;
  background: var(--surface-card);
  border: 1px solid var(--border);
  border-radius: 6px;
}

.filter-panel.hidden {
  display: none;
}

.search-input {
  width: 260px;
  padding: 0.45rem 0.7rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  font-size: 0.9rem;
}

.search-input:focus {
  outline: none;
  border-color: var(--primary);
}

/* === Tables === */
.table-wrapper {
  background: var(--surface-card);
  border: 1px solid var(--border);
  border-radius: 6px;
  overflow-x: auto;
}

.data-table {
  width: 100%;
  border-collapse: collapse;
}

.data-table th,
.data-table td {
  padding: 0.55rem 0.8rem;
  text-align: left;
  border-bottom: 1px solid var(--border);
  white-space: nowrap;
}

.data-table th {
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.03em;
  color: var(--text-muted);
}

.data-table tbody tr:hover {
  background: var(--surface);
}

.data-table .row-hidden {
  display: none;
}

.data-table .empty-row td {
  text-align: center;
  color: var(--text-muted);
  font-style: italic;
}

.acciones-col {
  width: 1%;
  text-align: right;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  padding: 0.45rem 0.9rem;
  border: 1px solid transparent;
  border-radius: 6px;
  font-size: 0.9rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn:disabled {
  opacity: 0.6;
  cursor: default;
}

.btn-primary {
  background: var(--primary);
  color: #ffffff;
}

.btn-primary:hover {
  background: var(--primary-dark);
}

.btn-secondary {
  background: var(--surface-card);
  border-color: var(--border);
  color: var(--text-primary);
}

.btn-secondary:hover {
  background: var(--surface);
}

.btn-danger {
  background: var(--danger);
  color: #ffffff;
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
}

.btn-ghost:hover {
  color: var(--text-primary);
}

.btn-sm {
  padding: 0.25rem 0.6rem;
  font-size: 0.8rem;
}

.btn-close {
  border: none;
  background: transparent;
  color: var(--text-muted);
  font-size: 1.1rem;
  line-height: 1;
  cursor: pointer;
}

.btn-close:hover {
  color: var(--text-primary);
}

/* === Cards and forms === */
.card {
  margin-top: 1.5rem;
  padding: 1rem 1.25rem 1.25rem;
  background: var(--surface-card);
  border: 1px solid var(--border);
  border-radius: 6px;
}

.card-title {
  margin-bottom: 0.75rem;
  font-size: 1.05rem;
  font-weight: 600;
}

.form-row {
  display: flex;
  gap: 1rem;
  margin-bottom: 0.9rem;
}

.form-field {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.form-label {
  font-size: 0.8rem;
  color: var(--text-secondary);
}

.form-control {
  padding: 0.45rem 0.7rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  font-size: 0.9rem;
}

.form-control:focus {
  outline: none;
  border-color: var(--primary);
}

.form-control[readonly] {
  background: var(--surface);
  color: var(--text-secondary);
}

.form-control.is-valid {
  border-color: var(--success);
}

.form-control.is-invalid {
  border-color: var(--danger);
}

.invalid-feedback {
  font-size: 0.78rem;
  color: var(--danger);
}

/* === Confirmation dialog === */
.confirm-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(31, 41, 51, 0.55);
  z-index: 100;
}

.confirm-dialog {
  width: 380px;
  padding: 1.25rem;
  background: var(--surface-card);
  border-radius: 8px;
  box-shadow: 0 12px 32px rgba(31, 41, 51, 0.25);
}

.confirm-title {
  font-size: 1.05rem;
  margin-bottom: 0.5rem;
}

.confirm-message {
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.confirm-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.5rem;
}

/* === Toasts === */
.toast-container {
  position: fixed;
  bottom: 1rem;
  right: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 110;
}

.toast {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  min-width: 260px;
  max-width: 360px;
  padding: 0.7rem 0.9rem;
  border-radius: 6px;
  color: #ffffff;
  box-shadow: 0 6px 18px rgba(31, 41, 51, 0.3);
}

.toast .btn-close {
  color: rgba(255, 255, 255, 0.8);
}

.toast .btn-close:hover {
  color: #ffffff;
}

.toast-info    { background: var(--info); }
.toast-success { background: var(--success); }
.toast-warning { background: var(--warning); }
.toast-danger  { background: var(--danger); }

.toast-body {
  flex: 1;
  font-size: 0.85rem;
}
"#;
