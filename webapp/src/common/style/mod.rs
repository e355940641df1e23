use constcat::concat;

mod components;
mod variables;

pub use components::BASE_COMPONENTS;
pub use variables::CSS_VARIABLES;

// single style bundle injected once from App
pub const MODERN_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Application-specific styles */
.app-header {
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-4);
  max-width: var(--container-width);
  margin: 0 auto;
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-6) var(--space-4);
}

.page-header {
  margin-bottom: var(--space-6);
}

.page-header p {
  color: var(--text-secondary);
}

/* Search bar */
.search-bar {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  margin-bottom: var(--space-6);
  background-color: var(--surface);
  padding: var(--space-3);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
}

.search-bar form {
  flex: 1;
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.search-bar .form-input {
  flex: 1;
}

.search-status {
  color: var(--text-secondary);
  white-space: nowrap;
}

/* Movie grid */
.movie-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
  gap: var(--space-4);
}

.movie-tile {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.movie-tile:hover {
  transform: translateY(-2px);
}

.movie-tile img {
  width: 100%;
  aspect-ratio: 2 / 3;
  object-fit: cover;
  display: block;
}

.movie-tile-caption {
  padding: var(--space-2) var(--space-3);
}

.movie-title {
  display: block;
  font-weight: 600;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.movie-tile-meta {
  display: flex;
  justify-content: space-between;
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.movie-rating {
  color: var(--primary-light);
}

/* Pagination */
.pagination {
  display: flex;
  justify-content: center;
  gap: var(--space-1);
  margin-bottom: var(--space-6);
}

.page-btn {
  min-width: 36px;
  padding: var(--space-1) var(--space-2);
  background-color: var(--surface);
  color: var(--text-primary);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  cursor: pointer;
}

.page-btn:hover:not(:disabled) {
  border-color: var(--primary);
}

.page-btn:disabled {
  color: var(--neutral-500);
  cursor: default;
}

.page-btn.active {
  background-color: var(--primary);
  border-color: var(--primary);
  color: var(--text-inverse);
}

.page-gap {
  align-self: center;
  color: var(--text-secondary);
  padding: 0 var(--space-1);
}

/* Detail overlay */
.modal-backdrop {
  position: fixed;
  inset: 0;
  background-color: rgba(0, 0, 0, 0.7);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
}

.modal-surface {
  position: relative;
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
  max-width: 720px;
  width: calc(100% - var(--space-8));
  max-height: 90vh;
  overflow-y: auto;
}

.modal-surface img {
  width: 100%;
  max-height: 400px;
  object-fit: cover;
  display: block;
  border-radius: var(--radius-lg) var(--radius-lg) 0 0;
}

.modal-close {
  position: absolute;
  top: var(--space-2);
  right: var(--space-2);
  width: 32px;
  height: 32px;
  border: none;
  border-radius: var(--radius-md);
  background-color: rgba(0, 0, 0, 0.6);
  color: var(--text-primary);
  font-size: 1.25rem;
  cursor: pointer;
  z-index: 1;
}

.modal-content {
  padding: var(--space-4) var(--space-6) var(--space-6);
}

.modal-content h2 {
  margin-bottom: var(--space-3);
}

.modal-content p {
  margin-bottom: var(--space-2);
  color: var(--text-secondary);
}

/* Toasts */
.toast-tray {
  position: fixed;
  top: var(--space-4);
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  z-index: 200;
}

.toast {
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  color: #fff;
  box-shadow: var(--shadow-lg);
  cursor: pointer;
}

.toast-error {
  background-color: var(--error);
}

.toast-info {
  background-color: var(--info);
}
"#,
);
