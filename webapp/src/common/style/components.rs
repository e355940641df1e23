pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:focus {
  box-shadow: 0 0 0 3px rgba(245, 158, 11, 0.3);
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

/* Forms */
.form-input {
  padding: var(--space-2) var(--space-3);
  background-color: var(--surface-raised);
  color: var(--text-primary);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
}

.form-input:focus {
  border-color: var(--border-focus);
  outline: none;
}

/* State panels */
.empty-state,
.error-state {
  padding: var(--space-8);
  text-align: center;
  color: var(--text-secondary);
}

.error-state {
  color: var(--error);
}

/* Loader */
.loader {
  display: flex;
  justify-content: center;
  padding: var(--space-6);
}

.spinner {
  width: 32px;
  height: 32px;
  border: 3px solid var(--neutral-700);
  border-top-color: var(--primary);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}"#;
